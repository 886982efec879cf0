//! Default values for the portfolio controllers.

// ── Theme ───────────────────────────────────────────────────────

/// Attribute on the document root carrying the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Icon shown while the dark theme is active (click to go light).
pub const ICON_SUN: &str = "fas fa-sun";

/// Icon shown while the light theme is active (click to go dark).
pub const ICON_MOON: &str = "fas fa-moon";

// ── Navigation ──────────────────────────────────────────────────

/// Fixed navbar height subtracted from anchor targets.
pub const NAVBAR_OFFSET_PX: f64 = 80.0;

/// Scroll offset past which the navbar turns more opaque.
pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 100.0;

/// Viewport width above which the mobile menu is force-closed.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub const NAVBAR_DARK_SOLID: &str = "rgba(17, 24, 39, 0.98)";
pub const NAVBAR_DARK_TRANSLUCENT: &str = "rgba(17, 24, 39, 0.95)";
pub const NAVBAR_LIGHT_SOLID: &str = "rgba(255, 255, 255, 0.98)";
pub const NAVBAR_LIGHT_TRANSLUCENT: &str = "rgba(255, 255, 255, 0.95)";

/// Class that shows the nav links on narrow viewports.
pub const MENU_OPEN_CLASS: &str = "active";

// ── Animation ───────────────────────────────────────────────────

pub const FADE_IN_THRESHOLD: f64 = 0.1;
pub const FADE_IN_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// One-way marker added to fade-in targets once they enter the viewport.
pub const VISIBLE_CLASS: &str = "visible";

/// Delay between consecutive skill card reveals.
pub const SKILL_STAGGER_MS: u32 = 200;

pub const HERO_DELAY_MS: u32 = 1000;
pub const TYPE_SPEED_MS: u32 = 150;
pub const HERO_NAME: &str = "Navya Pai";

// ── Skills ──────────────────────────────────────────────────────

pub const HIGHLIGHT_CLASS: &str = "highlighted";
pub const HIGHLIGHT_STYLE_ID: &str = "skill-highlight-style";

// ── Notices ─────────────────────────────────────────────────────

pub const SUCCESS_NOTICE_MS: u32 = 5000;
pub const INFO_NOTICE_MS: u32 = 4000;

// ── Images ──────────────────────────────────────────────────────

pub const DATA_SRC_ATTRIBUTE: &str = "data-src";
pub const LAZY_CLASS: &str = "lazy";
pub const LOADED_CLASS: &str = "loaded";

// ── Resume ──────────────────────────────────────────────────────

pub const RESUME_URL: &str = "https://drive.google.com/file/d/1qBFfNkCAHCckoa8q3F79VRRcESCuDetN/view?usp=sharing";
pub const RESUME_BUTTON_ID: &str = "resume-btn";

// ── Page-level ──────────────────────────────────────────────────

pub const ANIMATIONS_STYLE_ID: &str = "dynamic-animations";

/// Quiet period before a resize burst is logged.
pub const RESIZE_LOG_DEBOUNCE_MS: u32 = 250;

/// Id of the inline `<script type="application/json">` carrying config overrides.
pub const CONFIG_SCRIPT_ID: &str = "portfolio-config";
