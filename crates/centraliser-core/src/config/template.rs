use super::Config;

/// Generates the commented `config.toml` written by `centraliser init`.
///
/// Values are taken from `Config::default()` so the template never drifts
/// from the built-in defaults.
pub fn generate_config() -> String {
    let defaults = Config::default();
    let modifiers = defaults
        .hotkey
        .modifiers
        .iter()
        .map(|m| format!("{m:?}").to_ascii_lowercase())
        .map(|m| format!("\"{m}\""))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"# Centraliser configuration

[hotkey]
# Key that centres the focused window: a letter, digit, F1-F24,
# or a named key such as "Space", "Home" or "Insert".
key = "{key}"
# Any of "alt", "ctrl", "shift", "win". Use [] for no modifier.
modifiers = [{modifiers}]

[title]
# Longest window title read for `centraliser info`, in UTF-16
# code units (1-{max}). Emoji count as two.
max_chars = {max}

[logging]
# Write a log to ~/.config/centraliser/logs/centraliser.log
enabled = {enabled}
# "debug", "info", "warn" or "error"
level = "{level}"
# Rotate the log file once it reaches this many megabytes.
max_file_mb = {max_file_mb}
"#,
        key = defaults.hotkey.key,
        max = defaults.title.max_chars,
        enabled = defaults.logging.enabled,
        level = defaults.logging.level,
        max_file_mb = defaults.logging.max_file_mb,
    )
}
