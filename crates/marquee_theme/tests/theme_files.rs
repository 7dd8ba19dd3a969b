use marquee_theme::{ColorValue, Role, ThemeError, ThemeRegistry, ThemeState};
use pretty_assertions::assert_eq;

const OCEAN: &str = r##"
name = "ocean"

[tokens.blue]
c100 = "#99CCFF"
c500 = "#3366CC"

[tokens.accent]
primary = "#3399FF"

[colors.mediaCard]
barFillColor = "blue.c100"
badge = "#101010"
hoverAccent = "var(--accent)"

[colors.video.context]
sliderFilled = "accent.primary"
slider = "gray.c500"
"##;

#[test]
fn theme_file_registers_over_the_default_theme() {
    let mut registry = ThemeRegistry::builtin().unwrap();
    let ocean = registry.load_str(OCEAN).unwrap();

    assert_eq!(ocean.parent(), Some("default"));
    assert_eq!(
        ocean.lookup("mediaCard.barFillColor").map(ToString::to_string),
        Some("#99CCFF".to_string())
    );
    assert_eq!(
        ocean.color(Role::MediaCardHoverAccent),
        &ColorValue::var("--accent")
    );
    assert_eq!(
        ocean.color(Role::VideoContextSliderFilled).to_string(),
        "#3399FF"
    );
    assert_eq!(ocean.color(Role::VideoContextSlider).to_string(), "#404040");

    let css = ocean.to_css(":root");
    assert!(css.contains("--colors-mediaCard-hoverAccent: var(--accent);"));

    let names: Vec<&str> = registry.names().collect();
    assert_eq!(names, vec!["default", "pink", "ocean"]);
}

#[test]
fn theme_files_can_extend_loaded_themes() {
    let mut registry = ThemeRegistry::builtin().unwrap();
    registry.load_str(OCEAN).unwrap();
    let deep = registry
        .load_str(
            r#"
            name = "deep-ocean"
            extends = "ocean"

            [colors.background]
            main = "blue.c500"
            "#,
        )
        .unwrap();

    assert_eq!(deep.color(Role::BackgroundMain).to_string(), "#3366CC");
    assert_eq!(deep.color(Role::MediaCardBadge).to_string(), "#101010");
}

#[test]
fn loading_the_same_file_twice_is_a_duplicate() {
    let mut registry = ThemeRegistry::builtin().unwrap();
    registry.load_str(OCEAN).unwrap();
    let err = registry.load_str(OCEAN).unwrap_err();
    assert!(matches!(err, ThemeError::DuplicateTheme(ref name) if name == "ocean"));
    assert_eq!(err.to_string(), "a theme named `ocean` is already registered");
}

#[test]
fn unknown_fields_are_rejected() {
    let mut registry = ThemeRegistry::builtin().unwrap();
    let err = registry
        .load_str("name = \"x\"\nextend = \"pink\"")
        .unwrap_err();
    assert!(matches!(err, ThemeError::Toml(_)), "{err}");
}

#[test]
fn missing_files_report_the_path() {
    let mut registry = ThemeRegistry::builtin().unwrap();
    let err = registry
        .load_file("does/not/exist/theme.toml")
        .unwrap_err();
    match err {
        ThemeError::Io { ref path, .. } => {
            assert_eq!(path.to_str(), Some("does/not/exist/theme.toml"));
        }
        other => panic!("expected Io, got {other:?}"),
    }
}

#[test]
fn session_state_selects_a_loaded_theme() {
    let mut registry = ThemeRegistry::builtin().unwrap();
    registry.load_str(OCEAN).unwrap();

    let state = ThemeState::new(registry, "ocean").unwrap();
    assert_eq!(state.active_name(), "ocean");
    assert_eq!(
        state.lookup("mediaCard.badge").map(|v| v.to_string()),
        Some("#101010".to_string())
    );

    state.set_active("default").unwrap();
    assert_eq!(
        state.color(Role::MediaCardBadge).to_string(),
        "#0A0A0A"
    );
}
