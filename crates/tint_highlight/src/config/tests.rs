use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_palette_has_seven_colors() {
    let config = TintConfig::default();
    assert_eq!(config.palette_len(), 7);
    assert!(config.ignored_tags.is_empty());
    let palette = config.palette().expect("default palette must parse");
    assert_eq!(palette[0].to_string(), "#ff5555");
    assert_eq!(palette[6].to_string(), "#ff79c6");
}

#[test]
fn deserializes_partial_settings() {
    let config: TintConfig =
        serde_json::from_str(r#"{ "ignoredTags": ["Html", "BODY"] }"#).expect("valid settings");
    // Colors fall back to the default palette.
    assert_eq!(config.palette_len(), 7);
    assert_eq!(config.ignored_tags, vec!["Html", "BODY"]);
}

#[test]
fn ignored_keys_are_lowercased() {
    let config = TintConfig {
        colors: Vec::new(),
        ignored_tags: vec!["Html".to_string(), "BODY".to_string()],
    };
    let keys = config.ignored_keys();
    assert!(keys.contains("html"));
    assert!(keys.contains("body"));
    assert_eq!(keys.len(), 2);
}

#[test]
fn empty_colors_list_is_valid() {
    let config: TintConfig = serde_json::from_str(r#"{ "colors": [] }"#).expect("valid settings");
    assert_eq!(config.palette_len(), 0);
    assert_eq!(config.palette().expect("empty palette parses"), vec![]);
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<TintConfig>(r#"{ "colours": [] }"#);
    assert!(result.is_err());
}

#[test]
fn invalid_color_fails_validation() {
    let config: TintConfig =
        serde_json::from_str(r##"{ "colors": ["#ff5555", "red"] }"##).expect("shape is valid");
    let err = config.palette().expect_err("must reject `red`");
    assert!(matches!(err, ConfigError::InvalidColor { ref value } if value == "red"));
}

#[test]
fn load_reports_missing_file() {
    let err = TintConfig::load(Path::new("/nonexistent/tint.json")).expect_err("must fail");
    assert!(matches!(err, ConfigError::Io { .. }));
}
