//! Configuration loading
//!
//! Precedence, highest first: command-line flag, environment variable
//! (resolved by clap), TOML file, built-in default.

use std::path::{Path, PathBuf};

use maavarim_core::logging_facility::Profile;
use maavarim_core::{ExError, ExErrorKind, ExResult};
use maavarim_store::db::DEFAULT_DB_PATH;
use serde::{Deserialize, Serialize};

/// Looked up in the working directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "maavarim.toml";

const DEFAULT_LOG_FORMAT: &str = "pretty";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

impl AppConfig {
    /// Load the explicit config file, or `maavarim.toml` if it exists
    ///
    /// # Errors
    ///
    /// `Io` when an explicitly named file cannot be read, `InvalidInput`
    /// when the TOML does not parse.
    pub fn load(explicit: Option<&Path>) -> ExResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// # Errors
    ///
    /// See [`AppConfig::load`].
    pub fn from_file(path: &Path) -> ExResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_entity_id(path.display().to_string())
                .with_message(e.to_string())
        })?;
        Self::from_toml_str(&content).map_err(|e| e.with_entity_id(path.display().to_string()))
    }

    /// # Errors
    ///
    /// `InvalidInput` when the TOML does not parse.
    pub fn from_toml_str(content: &str) -> ExResult<Self> {
        toml::from_str(content).map_err(|e| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("load_config")
                .with_message(format!("TOML parsing error: {}", e))
        })
    }
}

/// Effective settings after every layer is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub db_path: PathBuf,
    pub log_profile: Profile,
}

impl Settings {
    /// Merge flag/env values over the file config and defaults
    ///
    /// # Errors
    ///
    /// `InvalidInput` for an unknown log format.
    pub fn resolve(
        db: Option<PathBuf>,
        log_format: Option<String>,
        file: &AppConfig,
    ) -> ExResult<Self> {
        let db_path = db
            .or_else(|| file.database.path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

        let format = log_format
            .or_else(|| file.logging.format.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FORMAT.to_string());
        let log_profile = format.parse::<Profile>().map_err(|reason| {
            ExError::new(ExErrorKind::InvalidInput)
                .with_op("resolve_config")
                .with_message(reason)
        })?;

        Ok(Self {
            db_path,
            log_profile,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = AppConfig::from_toml_str(
            r#"
[database]
path = "/var/lib/maavarim/store.db"

[logging]
format = "json"
"#,
        )
        .unwrap();

        assert_eq!(
            config.database.path,
            Some(PathBuf::from("/var/lib/maavarim/store.db"))
        );
        assert_eq!(config.logging.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_missing_sections_default() {
        let config = AppConfig::from_toml_str("[logging]\nformat = \"pretty\"\n").unwrap();
        assert_eq!(config.database.path, None);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        let err = AppConfig::from_toml_str("[database\npath = 1").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[database]\npath = \"from-file.db\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.database.path, Some(PathBuf::from("from-file.db")));
    }

    #[test]
    fn test_explicit_missing_file_is_io_error() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/maavarim.toml"))).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::Io);
    }

    #[test]
    fn test_flag_overrides_file_overrides_default() {
        let file = AppConfig {
            database: DatabaseConfig {
                path: Some(PathBuf::from("file.db")),
            },
            logging: LoggingConfig {
                format: Some("json".to_string()),
            },
        };

        let from_file = Settings::resolve(None, None, &file).unwrap();
        assert_eq!(from_file.db_path, PathBuf::from("file.db"));
        assert_eq!(from_file.log_profile, Profile::Production);

        let from_flag =
            Settings::resolve(Some(PathBuf::from("flag.db")), Some("pretty".into()), &file)
                .unwrap();
        assert_eq!(from_flag.db_path, PathBuf::from("flag.db"));
        assert_eq!(from_flag.log_profile, Profile::Development);

        let defaults = Settings::resolve(None, None, &AppConfig::default()).unwrap();
        assert_eq!(defaults.db_path, PathBuf::from(DEFAULT_DB_PATH));
        assert_eq!(defaults.log_profile, Profile::Development);
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        let err = Settings::resolve(None, Some("xml".into()), &AppConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
    }
}
