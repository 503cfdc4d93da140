//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::punctuation::Direction;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Timezone {
    #[default]
    Local,
    Utc,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub cli: CliSettings,
    pub backup: BackupSettings,
    pub log: LogSettings,
    /// Parsed `cli.default_direction`.
    #[serde(skip)]
    direction: Direction,
    /// Parsed `backup.timezone`.
    #[serde(skip)]
    timezone: Timezone,
}

impl Settings {
    pub fn default_direction(&self) -> Direction {
        self.direction
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CliSettings {
    pub default_direction: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackupSettings {
    pub timezone: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    pub filter: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    s.direction = s
        .cli
        .default_direction
        .parse()
        .map_err(|_| SettingsError::InvalidValue {
            field: "cli.default_direction".to_string(),
            reason: "must be \"kuten-to-comma\" or \"comma-to-kuten\"".to_string(),
        })?;
    s.timezone = match s.backup.timezone.as_str() {
        "local" => Timezone::Local,
        "utc" => Timezone::Utc,
        _ => {
            return Err(SettingsError::InvalidValue {
                field: "backup.timezone".to_string(),
                reason: "must be \"local\" or \"utc\"".to_string(),
            })
        }
    };
    if s.log.filter.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "log.filter".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_default_toml() {
        let s = parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap();
        assert_eq!(s.default_direction(), Direction::KutenToComma);
        assert_eq!(s.timezone(), Timezone::Local);
        assert_eq!(s.log.filter, "warn");
    }

    #[test]
    fn parse_valid_custom_toml() {
        let toml = r#"
[cli]
default_direction = "comma-to-kuten"

[backup]
timezone = "utc"

[log]
filter = "kuten_core=debug"
"#;
        let s = parse_settings_toml(toml).unwrap();
        assert_eq!(s.default_direction(), Direction::CommaToKuten);
        assert_eq!(s.timezone(), Timezone::Utc);
        assert_eq!(s.log.filter, "kuten_core=debug");
    }

    #[test]
    fn error_unknown_direction() {
        let toml = r#"
[cli]
default_direction = "sideways"

[backup]
timezone = "local"

[log]
filter = "warn"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert!(err.to_string().contains("cli.default_direction"));
    }

    #[test]
    fn error_unknown_timezone() {
        let toml = r#"
[cli]
default_direction = "kuten-to-comma"

[backup]
timezone = "Asia/Tokyo"

[log]
filter = "warn"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("backup.timezone"));
    }

    #[test]
    fn error_empty_filter() {
        let toml = r#"
[cli]
default_direction = "kuten-to-comma"

[backup]
timezone = "local"

[log]
filter = "  "
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(err.to_string().contains("log.filter"));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_settings_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn error_missing_section() {
        let toml = r#"
[cli]
default_direction = "kuten-to-comma"
"#;
        let err = parse_settings_toml(toml).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }
}
