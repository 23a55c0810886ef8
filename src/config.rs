//! Controller configuration with optional on-disk persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::osa::find_osascript;

/// Application targeted when nothing else is configured.
pub const DEFAULT_APPLICATION: &str = "Spotify";

#[derive(Error, Debug)]
pub enum ConfigError {
  #[error("Failed to read config: {0}")]
  Io(#[from] std::io::Error),
  #[error("Invalid config JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Invalid config: {0}")]
  Invalid(String),
}

/// Controller configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfig {
  /// Custom osascript path (None = auto-detect).
  #[serde(default)]
  pub interpreter_path: Option<String>,

  /// Application name used in `tell application "..."`.
  #[serde(default = "default_application")]
  pub application: String,
}

fn default_application() -> String {
  DEFAULT_APPLICATION.to_string()
}

impl Default for ControllerConfig {
  fn default() -> Self {
    Self {
      interpreter_path: None,
      application: default_application(),
    }
  }
}

impl ControllerConfig {
  /// Parse and validate configuration from JSON.
  pub fn from_json(json: &str) -> Result<Self, ConfigError> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Load configuration from a JSON file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    let json = std::fs::read_to_string(path)?;
    Self::from_json(&json)
  }

  /// `<config dir>/spotify-osa/config.json`, if the platform has a config dir.
  pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("spotify-osa").join("config.json"))
  }

  /// Load from `default_path()`, falling back to defaults when the file is
  /// missing or invalid.
  pub fn load_or_default() -> Self {
    let Some(path) = Self::default_path() else {
      return Self::default();
    };
    if !path.exists() {
      return Self::default();
    }

    match Self::load(&path) {
      Ok(config) => config,
      Err(e) => {
        log::warn!("Ignoring config at {:?}: {}", path, e);
        Self::default()
      }
    }
  }

  /// Validate configuration values.
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.application.trim().is_empty() {
      return Err(ConfigError::Invalid("Application name cannot be empty".to_string()));
    }
    if self.application.contains('"') {
      return Err(ConfigError::Invalid(
        "Application name cannot contain quotes".to_string(),
      ));
    }
    if let Some(path) = &self.interpreter_path {
      if path.trim().is_empty() {
        return Err(ConfigError::Invalid("Interpreter path cannot be empty".to_string()));
      }
    }
    Ok(())
  }

  /// Interpreter to launch: the configured path, or the detected osascript.
  pub fn interpreter(&self) -> PathBuf {
    match &self.interpreter_path {
      Some(path) => PathBuf::from(path),
      None => find_osascript(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_from_empty_object() {
    let config = ControllerConfig::from_json("{}").unwrap();
    assert_eq!(config, ControllerConfig::default());
    assert_eq!(config.application, "Spotify");
    assert_eq!(config.interpreter_path, None);
  }

  #[test]
  fn test_camel_case_fields() {
    let json = r#"{"interpreterPath":"/opt/bin/osascript","application":"Spotify Beta"}"#;
    let config = ControllerConfig::from_json(json).unwrap();
    assert_eq!(config.interpreter(), PathBuf::from("/opt/bin/osascript"));
    assert_eq!(config.application, "Spotify Beta");
  }

  #[test]
  fn test_rejects_invalid_application() {
    assert!(matches!(
      ControllerConfig::from_json(r#"{"application":"  "}"#),
      Err(ConfigError::Invalid(_))
    ));
    assert!(matches!(
      ControllerConfig::from_json(r#"{"application":"Spo\"tify"}"#),
      Err(ConfigError::Invalid(_))
    ));
  }

  #[test]
  fn test_rejects_empty_interpreter_path() {
    let result = ControllerConfig::from_json(r#"{"interpreterPath":""}"#);
    assert!(matches!(result, Err(ConfigError::Invalid(_))));
  }

  #[test]
  fn test_malformed_json() {
    assert!(matches!(
      ControllerConfig::from_json("{not json"),
      Err(ConfigError::Json(_))
    ));
  }

  #[test]
  fn test_load_missing_file_is_io_error() {
    let result = ControllerConfig::load(Path::new("/nonexistent/spotify-osa.json"));
    assert!(matches!(result, Err(ConfigError::Io(_))));
  }

  #[test]
  fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("spotify-osa-test-{}.json", std::process::id()));
    std::fs::write(&path, r#"{"application":"Spotify"}"#).unwrap();
    let config = ControllerConfig::load(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(config.application, "Spotify");
  }
}
