// ==========================================
// Pantry Labels - configuration loading
// ==========================================
// Lookup order:
//   1. explicit path (--config)
//   2. PANTRY_LABELS_CONFIG
//   3. <config_dir>/pantry-labels/config.json
//   4. built-in defaults
// ==========================================

use crate::config::label_config::LabelConfig;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "PANTRY_LABELS_CONFIG";
pub const CONFIG_DIR_NAME: &str = "pantry-labels";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("config file read failed ({path}): {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config file is not valid JSON ({path}): {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value for {key}: {message}")]
    Invalid { key: String, message: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager;

impl ConfigManager {
    /// Resolves and loads the configuration.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<LabelConfig> {
        match Self::resolve_path(explicit)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("no config file, using defaults");
                Ok(LabelConfig::default())
            }
        }
    }

    /// Path of the config file to use, if any.
    ///
    /// An explicit or env-var path must exist; the per-user file is optional.
    pub fn resolve_path(explicit: Option<&Path>) -> ConfigResult<Option<PathBuf>> {
        if let Some(path) = explicit {
            return Self::must_exist(path.to_path_buf()).map(Some);
        }

        if let Ok(value) = std::env::var(CONFIG_ENV_VAR) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Self::must_exist(PathBuf::from(trimmed)).map(Some);
            }
        }

        Ok(Self::default_user_path().filter(|p| p.is_file()))
    }

    /// `<config_dir>/pantry-labels/config.json`
    pub fn default_user_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    pub fn load_from_file(path: &Path) -> ConfigResult<LabelConfig> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> ConfigResult<LabelConfig> {
        let config: LabelConfig =
            serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
                path: PathBuf::new(),
                source,
            })?;
        Self::validate(&config)?;
        Ok(config)
    }

    pub fn validate(config: &LabelConfig) -> ConfigResult<()> {
        let markers = &config.filename_markers;
        for (key, value) in [
            ("filename_markers.inventory", &markers.inventory),
            ("filename_markers.delivery", &markers.delivery),
            ("filename_markers.pickup", &markers.pickup),
            ("summary_file_name", &config.summary_file_name),
        ] {
            if value.trim().is_empty() {
                return Err(invalid(key, "must not be empty"));
            }
        }

        let mut labels = HashSet::new();
        for window in &config.pickup_windows {
            if window.label.trim().is_empty() {
                return Err(invalid("pickup_windows.label", "must not be empty"));
            }
            if !labels.insert(window.label.as_str()) {
                return Err(invalid(
                    "pickup_windows.label",
                    &format!("duplicate label {}", window.label),
                ));
            }
            if window.window().is_none() {
                return Err(invalid(
                    "pickup_windows",
                    &format!(
                        "{}: need start_hour < end_hour <= 24, got [{}, {})",
                        window.label, window.start_hour, window.end_hour
                    ),
                ));
            }
        }

        if config.discovery_extensions.is_empty() {
            return Err(invalid("discovery_extensions", "must list at least one extension"));
        }

        if config.classification_sample_rows == 0 {
            return Err(invalid("classification_sample_rows", "must be at least 1"));
        }

        Ok(())
    }

    fn must_exist(path: PathBuf) -> ConfigResult<PathBuf> {
        if path.is_file() {
            Ok(path)
        } else {
            Err(ConfigError::NotFound(path))
        }
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::Invalid {
        key: key.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::label_config::PickupWindowConfig;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ConfigManager::validate(&LabelConfig::default()).is_ok());
    }

    #[test]
    fn test_load_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pickup_windows": [{{"label": "Thursday", "start_hour": 9, "end_hour": 17}}]}}"#
        )
        .unwrap();

        let config = ConfigManager::load(Some(file.path())).unwrap();
        assert_eq!(
            config.pickup_windows,
            vec![PickupWindowConfig::new("Thursday", 9, 17)]
        );
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let err = ConfigManager::load(Some(Path::new("/no/such/pantry.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_bad_json_reports_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = ConfigManager::load_from_file(file.path()).unwrap_err();
        match err {
            ConfigError::Parse { path, .. } => assert_eq!(path, file.path()),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_inverted_window() {
        let err = ConfigManager::from_json(
            r#"{"pickup_windows": [{"label": "Bad", "start_hour": 15, "end_hour": 12}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_rejects_duplicate_labels_and_empty_markers() {
        let mut config = LabelConfig::default();
        config.pickup_windows.push(PickupWindowConfig::new("Saturday", 1, 2));
        assert!(ConfigManager::validate(&config).is_err());

        let mut config = LabelConfig::default();
        config.filename_markers.pickup = " ".to_string();
        assert!(ConfigManager::validate(&config).is_err());
    }
}
