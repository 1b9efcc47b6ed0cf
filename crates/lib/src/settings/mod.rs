//! Analysis settings.
//!
//! Settings come from a JSON file; every field has a default so an empty
//! object (or no file at all) is a valid configuration.
//!
//! # Lookup order
//!
//! 1. an explicit path (must exist)
//! 2. `./dotscan.json`
//! 3. `{config_dir}/config.json`
//! 4. built-in defaults
//!
//! `DOTSCAN_NDEPS_EXECUTABLE` and `DOTSCAN_GALLIO_EXECUTABLE` override the
//! tool paths from whichever source was used.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::artifact::SelectionPolicy;
use crate::command::gallio::{DEFAULT_REPORT_NAME, DEFAULT_RUNNER};
use crate::consts::{
  DEFAULT_BUILD_CONFIGURATION, GALLIO_EXECUTABLE_ENV, LOCAL_SETTINGS_FILE, NDEPS_EXECUTABLE_ENV, USER_SETTINGS_FILE,
};
use crate::platform::paths::config_dir;

/// Errors that can occur while loading settings.
#[derive(Debug, Error)]
pub enum SettingsError {
  #[error("settings file not found: {0}")]
  NotFound(PathBuf),

  #[error("failed to read settings {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("invalid settings {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },

  #[error("invalid timeout {value:?}: {source}")]
  InvalidTimeout {
    value: String,
    #[source]
    source: humantime::DurationError,
  },
}

/// Settings shared by every analysis command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSettings {
  /// Comma-separated build configurations, e.g. `"Debug"` or `"Debug,Release"`.
  pub build_configurations: String,
  pub build_platform: Option<String>,
  /// Explicit assembly paths replacing the `bin/<configuration>` convention.
  pub assemblies: Vec<String>,
  pub selection: SelectionPolicy,
  pub ndeps_executable: Option<PathBuf>,
  pub gallio_executable: Option<PathBuf>,
  pub gallio_runner: String,
  pub gallio_filter: Option<String>,
  pub gallio_report_name: String,
  pub report_dir: PathBuf,
  /// Per-tool timeout in humantime syntax (`"10m"`, `"90s"`); `"0s"` disables it.
  pub timeout: String,
}

impl Default for AnalysisSettings {
  fn default() -> Self {
    Self {
      build_configurations: DEFAULT_BUILD_CONFIGURATION.to_string(),
      build_platform: None,
      assemblies: Vec::new(),
      selection: SelectionPolicy::default(),
      ndeps_executable: None,
      gallio_executable: None,
      gallio_runner: DEFAULT_RUNNER.to_string(),
      gallio_filter: None,
      gallio_report_name: DEFAULT_REPORT_NAME.to_string(),
      report_dir: PathBuf::from("target").join("sonar"),
      timeout: "10m".to_string(),
    }
  }
}

impl AnalysisSettings {
  /// Load settings from a specific file.
  pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
    let content = match fs::read_to_string(path) {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(SettingsError::NotFound(path.to_path_buf())),
      Err(source) => {
        return Err(SettingsError::Read {
          path: path.to_path_buf(),
          source,
        });
      }
    };

    let settings: Self = serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
      path: path.to_path_buf(),
      source,
    })?;
    settings.timeout()?;

    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
  }

  /// Load settings following the lookup order, then apply environment overrides.
  pub fn load(explicit: Option<&Path>) -> Result<Self, SettingsError> {
    let mut settings = match explicit {
      Some(path) => Self::from_file(path)?,
      None => match default_locations().into_iter().find(|p| p.is_file()) {
        Some(path) => Self::from_file(&path)?,
        None => {
          debug!("no settings file found, using defaults");
          Self::default()
        }
      },
    };

    settings.apply_env();
    Ok(settings)
  }

  fn apply_env(&mut self) {
    if let Some(value) = std::env::var_os(NDEPS_EXECUTABLE_ENV).filter(|v| !v.is_empty()) {
      self.ndeps_executable = Some(PathBuf::from(value));
    }
    if let Some(value) = std::env::var_os(GALLIO_EXECUTABLE_ENV).filter(|v| !v.is_empty()) {
      self.gallio_executable = Some(PathBuf::from(value));
    }
  }

  /// Parsed tool timeout; `None` when disabled.
  pub fn timeout(&self) -> Result<Option<Duration>, SettingsError> {
    let duration = humantime::parse_duration(self.timeout.trim()).map_err(|source| SettingsError::InvalidTimeout {
      value: self.timeout.clone(),
      source,
    })?;
    Ok((!duration.is_zero()).then_some(duration))
  }
}

/// Settings files probed when no explicit path is given, in order.
pub fn default_locations() -> Vec<PathBuf> {
  let mut locations = vec![PathBuf::from(LOCAL_SETTINGS_FILE)];
  if let Some(dir) = config_dir() {
    locations.push(dir.join(USER_SETTINGS_FILE));
  }
  locations
}
