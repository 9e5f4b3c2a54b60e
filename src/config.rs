use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DoseError, Result};

/// Environment variable that overrides the table directory.
pub const DATA_DIR_ENV: &str = "EFFECTIVE_DOSE_DATA_DIR";

// ---------------------------------------------------------------------------
// Store configuration
// ---------------------------------------------------------------------------

/// Where a [`crate::DoseStore`] finds its table files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding the `icrp116/` and `icrp119/` table folders.
    pub data_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("data")
                .join("effective_dose"),
        }
    }
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Default configuration with [`DATA_DIR_ENV`] applied when set.
    pub fn from_env() -> Self {
        match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => {
                log::debug!("dose tables from ${DATA_DIR_ENV}: {}", Path::new(&dir).display());
                Self::new(dir)
            }
            _ => Self::default(),
        }
    }

    /// Read a JSON configuration such as `{"data_dir": "/opt/icrp"}`.
    /// A relative `data_dir` is resolved against the file's directory.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DoseError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let mut config: StoreConfig =
            serde_json::from_str(&text).map_err(|e| DoseError::Config {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        if config.data_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.data_dir = parent.join(&config.data_dir);
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_into_the_crate() {
        let config = StoreConfig::default();
        assert!(config.data_dir.ends_with("data/effective_dose"));
    }

    #[test]
    fn json_relative_dir_resolves_next_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dose.json");
        std::fs::write(&path, r#"{"data_dir": "tables"}"#).unwrap();
        let config = StoreConfig::from_json_file(&path).unwrap();
        assert_eq!(config.data_dir, dir.path().join("tables"));
    }

    #[test]
    fn json_absolute_dir_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dose.json");
        let json = serde_json::json!({ "data_dir": "/opt/icrp" }).to_string();
        std::fs::write(&path, json).unwrap();
        let config = StoreConfig::from_json_file(&path).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/opt/icrp"));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dose.json");
        std::fs::write(&path, "{ data_dir: ").unwrap();
        let err = StoreConfig::from_json_file(&path).unwrap_err();
        assert!(matches!(err, DoseError::Config { .. }), "{err}");
    }
}
