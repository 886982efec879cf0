use super::*;

fn metrics(scroll_top: f64, document_height: f64, viewport_height: f64) -> ScrollMetrics {
    ScrollMetrics { scroll_top, document_height, viewport_height }
}

fn controller() -> NavigationController {
    NavigationController::new(NavigationConfig::default())
}

// =============================================================
// scroll_progress
// =============================================================

#[test]
fn progress_is_zero_at_top() {
    assert_eq!(scroll_progress(metrics(0.0, 3000.0, 800.0)), 0.0);
}

#[test]
fn progress_is_hundred_at_bottom() {
    assert_eq!(scroll_progress(metrics(2200.0, 3000.0, 800.0)), 100.0);
}

#[test]
fn progress_is_proportional_in_between() {
    assert_eq!(scroll_progress(metrics(550.0, 3000.0, 800.0)), 25.0);
}

#[test]
fn progress_does_not_divide_by_zero() {
    assert_eq!(scroll_progress(metrics(0.0, 800.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(metrics(10.0, 800.0, 800.0)), 0.0);
}

#[test]
fn progress_handles_short_content() {
    assert_eq!(scroll_progress(metrics(0.0, 500.0, 800.0)), 0.0);
}

#[test]
fn progress_is_clamped_on_overscroll() {
    assert_eq!(scroll_progress(metrics(-40.0, 3000.0, 800.0)), 0.0);
    assert_eq!(scroll_progress(metrics(2300.0, 3000.0, 800.0)), 100.0);
}

// =============================================================
// anchor and background helpers
// =============================================================

#[test]
fn anchor_offset_subtracts_navbar() {
    assert_eq!(anchor_offset(1200.0, 80.0), 1120.0);
}

#[test]
fn navbar_background_by_theme_and_threshold() {
    assert_eq!(navbar_background(Theme::Light, 0.0, 100.0), "rgba(255, 255, 255, 0.95)");
    assert_eq!(navbar_background(Theme::Light, 100.0, 100.0), "rgba(255, 255, 255, 0.95)");
    assert_eq!(navbar_background(Theme::Light, 101.0, 100.0), "rgba(255, 255, 255, 0.98)");
    assert_eq!(navbar_background(Theme::Dark, 50.0, 100.0), "rgba(17, 24, 39, 0.95)");
    assert_eq!(navbar_background(Theme::Dark, 500.0, 100.0), "rgba(17, 24, 39, 0.98)");
}

// =============================================================
// NavigationController
// =============================================================

#[test]
fn anchor_click_scrolls_below_navbar() {
    assert_eq!(controller().on_anchor_click(Some(900.0)), vec![Effect::ScrollTo { top: 820.0 }]);
}

#[test]
fn anchor_click_without_target_is_noop() {
    assert!(controller().on_anchor_click(None).is_empty());
}

#[test]
fn scroll_sets_progress_and_background_from_current_theme() {
    let nav = controller();
    let mut state = AppState::new();
    state.theme = Theme::Dark;
    let effects = nav.on_scroll(&state, metrics(1100.0, 3000.0, 800.0));
    assert_eq!(
        effects,
        vec![
            Effect::SetStyle { target: Target::ScrollProgress, property: "width", value: "50%".into() },
            Effect::SetStyle { target: Target::Navbar, property: "background", value: "rgba(17, 24, 39, 0.98)".into() },
        ]
    );
}

#[test]
fn scroll_reads_latest_theme_write() {
    let nav = controller();
    let mut state = AppState::new();
    let before = nav.on_scroll(&state, metrics(0.0, 3000.0, 800.0));
    state.theme = Theme::Dark;
    let after = nav.on_scroll(&state, metrics(0.0, 3000.0, 800.0));
    assert_ne!(before[1], after[1]);
}

#[test]
fn menu_button_toggles_open_class() {
    let nav = controller();
    let mut state = AppState::new();
    assert_eq!(nav.on_menu_button(&mut state), vec![Effect::AddClass { target: Target::NavLinks, class: "active" }]);
    assert!(state.menu_open);
    assert_eq!(nav.on_menu_button(&mut state), vec![Effect::RemoveClass { target: Target::NavLinks, class: "active" }]);
    assert!(!state.menu_open);
}

#[test]
fn nav_link_closes_menu() {
    let nav = controller();
    let mut state = AppState::new();
    nav.on_menu_button(&mut state);
    nav.on_nav_link(&mut state);
    assert!(!state.menu_open);
}

#[test]
fn click_inside_navbar_keeps_menu_open() {
    let nav = controller();
    let mut state = AppState::new();
    nav.on_menu_button(&mut state);
    assert!(nav.on_document_click(&mut state, true).is_empty());
    assert!(state.menu_open);
}

#[test]
fn click_outside_navbar_closes_menu() {
    let nav = controller();
    let mut state = AppState::new();
    nav.on_menu_button(&mut state);
    let effects = nav.on_document_click(&mut state, false);
    assert_eq!(effects, vec![Effect::RemoveClass { target: Target::NavLinks, class: "active" }]);
    assert!(!state.menu_open);
}

#[test]
fn resize_past_breakpoint_closes_menu() {
    let nav = controller();
    let mut state = AppState::new();
    nav.on_menu_button(&mut state);

    assert!(nav.on_resize(&mut state, 768.0).is_empty());
    assert!(state.menu_open);

    assert_eq!(nav.on_resize(&mut state, 769.0).len(), 1);
    assert!(!state.menu_open);
}
