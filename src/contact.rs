//! Contact form capture.
//!
//! Submissions are appended to an in-memory log on [`AppState`] and never
//! leave the page. There is no validation: empty or malformed values are
//! stored as given.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use serde::{Deserialize, Serialize};

use crate::effect::Effect;
use crate::notice::{self, NoticeKind};
use crate::state::AppState;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

/// Values read from `#name`, `#email`, `#subject` and `#message`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// ISO-8601 time of submission.
    pub timestamp: String,
}

#[derive(Debug)]
pub struct ContactFormController {
    enabled: bool,
    notice_ms: u32,
}

impl ContactFormController {
    #[must_use]
    pub fn new(notice_ms: u32) -> Self {
        Self { enabled: false, notice_ms }
    }

    /// Enable handling only when the page has a contact form.
    pub fn initialize(&mut self, has_form: bool) {
        self.enabled = has_form;
        if !has_form {
            log::debug!("no #contact-form, contact handling disabled");
        }
    }

    pub fn on_submit(&self, state: &mut AppState, fields: FormFields, timestamp: String) -> Vec<Effect> {
        if !self.enabled {
            return Vec::new();
        }
        let FormFields { name, email, subject, message } = fields;
        let submission = FormSubmission { name, email, subject, message, timestamp };
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("form submitted: {json}"),
            Err(err) => log::warn!("form submitted (unserializable: {err})"),
        }
        state.submissions.push(submission);

        let mut effects = notice::show(state, NoticeKind::Success, SUCCESS_MESSAGE, self.notice_ms).to_vec();
        effects.push(Effect::ResetForm);
        effects
    }
}
