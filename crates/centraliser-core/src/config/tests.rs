use super::*;
use crate::Modifier;

#[test]
fn default_config_has_expected_values() {
    // Arrange / Act
    let config = Config::default();

    // Assert
    assert_eq!(config.hotkey.key, "C");
    assert_eq!(config.hotkey.modifiers, vec![Modifier::Win]);
    assert_eq!(config.title.max_chars, 60_000);
    assert!(!config.logging.enabled);
}

#[test]
fn partial_toml_uses_defaults_for_missing_fields() {
    // Arrange
    let toml_str = "[hotkey]\nkey = \"F9\"\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert_eq!(config.hotkey.key, "F9");
    assert_eq!(config.hotkey.modifiers, vec![Modifier::Win]);
    assert_eq!(config.title, TitleConfig::default());
}

#[test]
fn empty_modifier_list_is_kept() {
    // Arrange
    let toml_str = "[hotkey]\nkey = \"Pause\"\nmodifiers = []\n";

    // Act
    let config: Config = toml::from_str(toml_str).unwrap();

    // Assert
    assert!(config.hotkey.modifiers.is_empty());
}

#[test]
fn validate_clamps_title_limit() {
    // Arrange
    let mut too_small = Config {
        title: TitleConfig { max_chars: 0 },
        ..Default::default()
    };
    let mut too_large = Config {
        title: TitleConfig { max_chars: 1_000_000 },
        ..Default::default()
    };

    // Act
    too_small.validate();
    too_large.validate();

    // Assert
    assert_eq!(too_small.title.max_chars, 1);
    assert_eq!(too_large.title.max_chars, 60_000);
}

#[test]
fn validate_restores_blank_key_and_trims() {
    // Arrange
    let mut blank: Config = toml::from_str("[hotkey]\nkey = \"  \"\n").unwrap();
    let mut padded: Config = toml::from_str("[hotkey]\nkey = \" F9 \"\n").unwrap();

    // Act
    blank.validate();
    padded.validate();

    // Assert
    assert_eq!(blank.hotkey.key, "C");
    assert_eq!(padded.hotkey.key, "F9");
}

#[test]
fn unknown_modifier_is_a_parse_error() {
    let result: Result<Config, _> = toml::from_str("[hotkey]\nmodifiers = [\"hyper\"]\n");
    assert!(result.is_err());
}

#[test]
fn template_parses_to_defaults() {
    // Arrange
    let template = template::generate_config();

    // Act
    let config: Config = toml::from_str(&template).unwrap();

    // Assert
    assert_eq!(config, Config::default());
}

#[test]
fn missing_file_yields_defaults() {
    // Arrange
    let path = std::env::temp_dir().join("centraliser-no-such-dir/config.toml");

    // Act
    let config = load_from(&path);

    // Assert
    assert_eq!(config, Config::default());
}

#[test]
fn try_load_reports_parse_errors() {
    // Arrange
    let path = std::env::temp_dir().join(format!(
        "centraliser-bad-config-{}.toml",
        std::process::id()
    ));
    std::fs::write(&path, "[hotkey\nkey = 1").unwrap();

    // Act
    let result = try_load_from(&path);

    // Assert
    assert!(matches!(result, Err(crate::Error::Config(_))));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn validate_drops_repeated_modifiers() {
    // Arrange
    let mut config: Config =
        toml::from_str("[hotkey]\nmodifiers = [\"ctrl\", \"alt\", \"ctrl\"]\n").unwrap();

    // Act
    config.validate();

    // Assert
    assert_eq!(config.hotkey.modifiers, vec![Modifier::Ctrl, Modifier::Alt]);
}

#[test]
fn validate_caps_log_file_size() {
    // Arrange
    let mut config: Config =
        toml::from_str("[logging]\nmax_file_mb = 9223372036854775807\n").unwrap();

    // Act
    config.validate();

    // Assert
    assert_eq!(config.logging.max_file_mb, crate::log::MAX_FILE_MB);
}
