//! Configuration handling for the form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::notify::DEFAULT_TOAST_DURATION;

/// Default tracing filter when neither RUST_LOG nor the config set one
pub const DEFAULT_LOG_FILTER: &str = "feedback_form=info";

/// User configuration for the form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FormConfig {
    /// How long a toast stays on screen, in milliseconds
    pub toast_duration_ms: Option<u64>,
    /// Tracing filter directive, e.g. "feedback_form=debug"
    pub log_filter: Option<String>,
}

impl FormConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "feedback-form", "feedback-form")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Get the log file path
    pub fn log_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().join("feedback-form.log"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn toast_duration(&self) -> Duration {
        self.toast_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_TOAST_DURATION)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.toast_duration_ms.is_none());
        assert!(config.log_filter.is_none());
        assert_eq!(config.toast_duration(), Duration::from_secs(5));
        assert_eq!(config.log_filter(), "feedback_form=info");
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.toast_duration_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"toast_duration_ms": 1500, "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.toast_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_from_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = FormConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert!(config.toast_duration_ms.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"toast_duration_ms": 2000, "log_filter": "feedback_form=debug"}}"#
        )
        .unwrap();

        let config = FormConfig::load_from(file.path()).unwrap();
        assert_eq!(config.toast_duration(), Duration::from_secs(2));
        assert_eq!(config.log_filter(), "feedback_form=debug");
    }

    #[test]
    fn test_load_from_malformed_file_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(FormConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn test_paths_return_option() {
        // Just test that the functions don't panic
        let _config = FormConfig::config_path();
        let _log = FormConfig::log_path();
    }
}
