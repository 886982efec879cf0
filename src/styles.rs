//! Inline style strings and injected stylesheet text.

#[cfg(test)]
#[path = "styles_test.rs"]
mod styles_test;

use crate::notice::NoticeKind;

/// Keyframes shared by notices and entrance effects. Injected once at startup.
pub const ANIMATIONS_CSS: &str = r"
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}

@keyframes bounce {
    0%, 20%, 53%, 80%, 100% { transform: translate3d(0, 0, 0); }
    40%, 43% { transform: translate3d(0, -30px, 0); }
    70% { transform: translate3d(0, -15px, 0); }
    90% { transform: translate3d(0, -4px, 0); }
}

.bounce { animation: bounce 1s ease infinite; }

@keyframes fadeInUp {
    from { opacity: 0; transform: translate3d(0, 40px, 0); }
    to { opacity: 1; transform: translate3d(0, 0, 0); }
}

.fadeInUp { animation: fadeInUp 0.6s ease forwards; }
";

/// Highlighted skill tag. Injected once at startup.
pub const HIGHLIGHT_CSS: &str = r"
.skill-tag.highlighted {
    background: var(--primary-color) !important;
    color: white !important;
    transform: scale(1.05) !important;
    box-shadow: 0 5px 15px rgba(37, 99, 235, 0.4) !important;
}
";

pub const RESUME_BUTTON_STYLE: &str = "position: fixed; bottom: 2rem; right: 2rem; width: 60px; height: 60px; \
     border-radius: 50%; background: var(--primary-color); color: white; border: none; font-size: 1.2rem; \
     cursor: pointer; box-shadow: 0 5px 15px rgba(0,0,0,0.2); transition: all 0.3s ease; z-index: 999; \
     display: flex; align-items: center; justify-content: center;";

pub const NOTICE_ICON_STYLE: &str = "margin-right: 0.5rem;";

/// Fixed top-right toast sliding in from the edge.
#[must_use]
pub fn notice_style(kind: NoticeKind) -> String {
    let max_width = match kind {
        NoticeKind::Success | NoticeKind::Info => "",
        NoticeKind::Hint => " max-width: 300px;",
    };
    format!(
        "position: fixed; top: 100px; right: 20px; background: {}; color: white; padding: 1rem 1.5rem; \
         border-radius: 8px; box-shadow: 0 5px 15px rgba(0,0,0,0.2); z-index: 1002;{max_width} \
         animation: slideInRight 0.5s ease;",
        kind.background()
    )
}
