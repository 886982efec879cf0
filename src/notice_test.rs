use super::*;

#[test]
fn show_emits_notice_then_dismissal() {
    let mut state = AppState::new();
    let [shown, dismiss] = show(&mut state, NoticeKind::Info, "hello", 4000);

    let Effect::ShowNotice(notice) = shown else {
        panic!("expected ShowNotice, got {shown:?}");
    };
    assert_eq!(notice.kind, NoticeKind::Info);
    assert_eq!(notice.message, "hello");
    assert_eq!(notice.duration_ms, 4000);

    assert_eq!(
        dismiss,
        Effect::Schedule { delay_ms: 4000, task: Task::standalone(TaskKind::DismissNotice { id: notice.id }) }
    );
}

#[test]
fn consecutive_notices_get_distinct_ids() {
    let mut state = AppState::new();
    let [first, _] = show(&mut state, NoticeKind::Success, "a", 5000);
    let [second, _] = show(&mut state, NoticeKind::Success, "b", 5000);
    match (first, second) {
        (Effect::ShowNotice(a), Effect::ShowNotice(b)) => assert_ne!(a.id, b.id),
        other => panic!("unexpected effects: {other:?}"),
    }
}

#[test]
fn kinds_have_distinct_icons_and_colors() {
    assert_eq!(NoticeKind::Success.icon_class(), "fas fa-check-circle");
    assert_eq!(NoticeKind::Info.icon_class(), "fas fa-info-circle");
    assert_eq!(NoticeKind::Success.background(), "#10b981");
    assert_eq!(NoticeKind::Info.background(), "var(--primary-color)");
}
