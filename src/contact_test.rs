use super::*;
use crate::effect::{Task, TaskKind};

fn jane() -> FormFields {
    FormFields { name: "Jane".into(), email: "j@x.com".into(), subject: "Hi".into(), message: "Hello".into() }
}

fn enabled() -> ContactFormController {
    let mut controller = ContactFormController::new(5000);
    controller.initialize(true);
    controller
}

#[test]
fn submit_stores_exactly_one_record() {
    let controller = enabled();
    let mut state = AppState::new();
    controller.on_submit(&mut state, jane(), "2024-05-01T10:00:00.000Z".into());

    assert_eq!(
        state.submissions,
        vec![FormSubmission {
            name: "Jane".into(),
            email: "j@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
            timestamp: "2024-05-01T10:00:00.000Z".into(),
        }]
    );
}

#[test]
fn submit_shows_success_notice_and_resets_form() {
    let controller = enabled();
    let mut state = AppState::new();
    let effects = controller.on_submit(&mut state, jane(), "t".into());

    assert_eq!(effects.len(), 3);
    let Effect::ShowNotice(notice) = &effects[0] else {
        panic!("expected notice first, got {:?}", effects[0]);
    };
    assert_eq!(notice.kind, NoticeKind::Success);
    assert_eq!(notice.message, SUCCESS_MESSAGE);
    assert_eq!(
        effects[1],
        Effect::Schedule { delay_ms: 5000, task: Task::standalone(TaskKind::DismissNotice { id: notice.id }) }
    );
    assert_eq!(effects[2], Effect::ResetForm);
}

#[test]
fn empty_fields_are_accepted() {
    let controller = enabled();
    let mut state = AppState::new();
    controller.on_submit(&mut state, FormFields::default(), "t".into());
    assert_eq!(state.submissions.len(), 1);
    assert_eq!(state.submissions[0].name, "");
}

#[test]
fn submissions_accumulate_in_order() {
    let controller = enabled();
    let mut state = AppState::new();
    controller.on_submit(&mut state, jane(), "1".into());
    controller.on_submit(&mut state, FormFields { name: "Kim".into(), ..jane() }, "2".into());
    let names: Vec<&str> = state.submissions.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Jane", "Kim"]);
}

#[test]
fn missing_form_disables_handler() {
    let mut controller = ContactFormController::new(5000);
    controller.initialize(false);
    let mut state = AppState::new();
    assert!(controller.on_submit(&mut state, jane(), "t".into()).is_empty());
    assert!(state.submissions.is_empty());
}

#[test]
fn submission_serializes_all_fields() {
    let submission = FormSubmission {
        name: "Jane".into(),
        email: "j@x.com".into(),
        subject: "Hi".into(),
        message: "Hello".into(),
        timestamp: "t".into(),
    };
    let value = serde_json::to_value(&submission).unwrap();
    assert_eq!(value["email"], "j@x.com");
    assert_eq!(value["timestamp"], "t");
}
