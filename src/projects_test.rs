use super::*;

#[test]
fn link_message_names_link_and_project() {
    assert_eq!(
        link_message("  Live Demo ", Some("Weather App")),
        "Live Demo for \"Weather App\" - This would link to the actual project/repository"
    );
}

#[test]
fn link_message_without_title() {
    assert_eq!(link_message("GitHub", None), "GitHub - This would link to the actual project/repository");
    assert_eq!(link_message("GitHub", Some("   ")), "GitHub - This would link to the actual project/repository");
}

#[test]
fn hover_enter_and_leave() {
    let mut projects = ProjectController::new(4000);
    projects.initialize(2);
    assert_eq!(
        projects.on_hover(1, true),
        vec![
            Effect::SetStyle { target: Target::ProjectHeader(1), property: "transform", value: "scale(1.02)".into() },
            Effect::SetStyle { target: Target::ProjectContent(1), property: "transform", value: "translateY(-5px)".into() },
        ]
    );
    assert_eq!(
        projects.on_hover(1, false),
        vec![
            Effect::SetStyle { target: Target::ProjectHeader(1), property: "transform", value: "scale(1)".into() },
            Effect::SetStyle { target: Target::ProjectContent(1), property: "transform", value: "translateY(0)".into() },
        ]
    );
}

#[test]
fn hover_on_unknown_card_is_ignored() {
    let projects = ProjectController::new(4000);
    assert!(projects.on_hover(0, true).is_empty());
}

#[test]
fn link_click_shows_four_second_hint_notice() {
    let projects = ProjectController::new(4000);
    let mut state = AppState::new();
    let effects = projects.on_link_click(&mut state, "Code", Some("Portfolio"));
    assert_eq!(effects.len(), 2);
    let Effect::ShowNotice(notice) = &effects[0] else {
        panic!("expected notice, got {:?}", effects[0]);
    };
    assert_eq!(notice.kind, NoticeKind::Hint);
    assert_eq!(notice.duration_ms, 4000);
    assert!(notice.message.starts_with("Code for \"Portfolio\""));
    assert!(matches!(effects[1], Effect::Schedule { delay_ms: 4000, .. }));
}

#[test]
fn rapid_clicks_stack_notices() {
    let projects = ProjectController::new(4000);
    let mut state = AppState::new();
    let shown: usize = (0..3)
        .map(|_| projects.on_link_click(&mut state, "Code", None))
        .filter(|effects| matches!(effects[0], Effect::ShowNotice(_)))
        .count();
    assert_eq!(shown, 3);
}
