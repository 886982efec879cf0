use super::*;

#[test]
fn app_state_default_is_light_and_empty() {
    let state = AppState::new();
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.saved_theme, None);
    assert!(!state.menu_open);
    assert_eq!(state.highlighted_tag, None);
    assert!(state.submissions.is_empty());
}

#[test]
fn notice_ids_are_unique_and_increasing() {
    let mut state = AppState::new();
    let a = state.next_notice_id();
    let b = state.next_notice_id();
    assert!(b > a);
}

#[test]
fn timeline_ids_do_not_share_counter_with_notices() {
    let mut state = AppState::new();
    state.next_notice_id();
    state.next_notice_id();
    assert_eq!(state.next_timeline_id(), TimelineId(1));
}
