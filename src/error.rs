//! Crate error type.
//!
//! Only startup paths return errors. Per-event failures in the browser host
//! are logged and dropped so one broken element never stops the page.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("browser call failed: {0}")]
    Js(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

#[cfg(feature = "web")]
impl From<wasm_bindgen::JsValue> for PortfolioError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "web")]
impl From<PortfolioError> for wasm_bindgen::JsValue {
    fn from(err: PortfolioError) -> Self {
        Self::from_str(&err.to_string())
    }
}
