use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_default_is_light() {
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn toggled_twice_returns_original() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn icon_matches_theme() {
    assert_eq!(Theme::Dark.icon_class(), "fas fa-sun");
    assert_eq!(Theme::Light.icon_class(), "fas fa-moon");
}

#[test]
fn resolve_prefers_saved_over_system() {
    assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
    assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
    assert_eq!(Theme::resolve(None, true), Theme::Dark);
    assert_eq!(Theme::resolve(None, false), Theme::Light);
}

#[test]
fn serde_uses_lowercase_names() {
    assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    assert_eq!(serde_json::from_str::<Theme>("\"light\"").unwrap(), Theme::Light);
}

// =============================================================
// ThemeController
// =============================================================

fn applied(effects: &[Effect]) -> (String, &'static str) {
    let mut attr = None;
    let mut icon = None;
    for effect in effects {
        match effect {
            Effect::SetAttribute { target: Target::Root, name: "data-theme", value } => attr = Some(value.clone()),
            Effect::SetClassName { target: Target::ThemeIcon, value } => icon = Some(*value),
            other => panic!("unexpected effect {other:?}"),
        }
    }
    (attr.unwrap(), icon.unwrap())
}

#[test]
fn initialize_follows_system_preference() {
    let controller = ThemeController::new(None);
    let mut state = AppState::new();
    let effects = controller.initialize(&mut state, true);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(applied(&effects), ("dark".to_string(), "fas fa-sun"));
    assert_eq!(state.saved_theme, None);
}

#[test]
fn initialize_prefers_in_memory_choice() {
    let controller = ThemeController::new(None);
    let mut state = AppState::new();
    state.saved_theme = Some(Theme::Light);
    controller.initialize(&mut state, true);
    assert_eq!(state.theme, Theme::Light);
}

#[test]
fn toggle_flips_and_saves() {
    let controller = ThemeController::new(None);
    let mut state = AppState::new();
    controller.initialize(&mut state, false);

    let effects = controller.toggle(&mut state);
    assert_eq!(state.theme, Theme::Dark);
    assert_eq!(state.saved_theme, Some(Theme::Dark));
    assert_eq!(applied(&effects), ("dark".to_string(), "fas fa-sun"));

    let effects = controller.toggle(&mut state);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(state.saved_theme, Some(Theme::Light));
    assert_eq!(applied(&effects), ("light".to_string(), "fas fa-moon"));
}

#[test]
fn every_call_writes_one_attribute_and_one_icon() {
    let controller = ThemeController::new(None);
    let mut state = AppState::new();
    assert_eq!(controller.initialize(&mut state, false).len(), 2);
    assert_eq!(controller.toggle(&mut state).len(), 2);
}

#[test]
fn configured_theme_beats_system_but_not_toggle() {
    let controller = ThemeController::new(Some(Theme::Light));
    let mut state = AppState::new();
    controller.initialize(&mut state, true);
    assert_eq!(state.theme, Theme::Light);

    state.saved_theme = Some(Theme::Dark);
    controller.initialize(&mut state, false);
    assert_eq!(state.theme, Theme::Dark);
}
