use super::*;

#[test]
fn initialize_mounts_button() {
    let resume = ResumeController::new(ResumeConfig::default(), 4000);
    assert_eq!(resume.initialize(), vec![Effect::MountResumeButton]);
}

#[test]
fn hover_grows_and_recolors() {
    let resume = ResumeController::new(ResumeConfig::default(), 4000);
    assert_eq!(
        resume.on_hover(true),
        vec![
            Effect::SetStyle { target: Target::ResumeButton, property: "transform", value: "scale(1.1)".into() },
            Effect::SetStyle {
                target: Target::ResumeButton,
                property: "background",
                value: "var(--secondary-color)".into()
            },
        ]
    );
    assert_eq!(resume.on_hover(false)[1], style(Target::ResumeButton, "background", "var(--primary-color)"));
}

#[test]
fn click_shows_notice_then_opens_url() {
    let config = ResumeConfig { url: "https://example.com/cv.pdf".into(), placeholder_notice: true };
    let resume = ResumeController::new(config, 4000);
    let mut state = AppState::new();
    let effects = resume.on_click(&mut state);

    assert_eq!(effects.len(), 3);
    assert!(matches!(&effects[0], Effect::ShowNotice(n) if n.message == PLACEHOLDER_MESSAGE && n.duration_ms == 4000));
    assert!(matches!(&effects[0], Effect::ShowNotice(n) if n.kind == NoticeKind::Info));
    assert!(matches!(effects[1], Effect::Schedule { delay_ms: 4000, .. }));
    assert_eq!(effects[2], Effect::OpenUrl { url: "https://example.com/cv.pdf".into() });
}

#[test]
fn click_without_placeholder_only_opens_url() {
    let config = ResumeConfig { url: "https://example.com/cv.pdf".into(), placeholder_notice: false };
    let resume = ResumeController::new(config, 4000);
    let mut state = AppState::new();
    assert_eq!(resume.on_click(&mut state), vec![Effect::OpenUrl { url: "https://example.com/cv.pdf".into() }]);
}
