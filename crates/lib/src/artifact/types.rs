//! Types for artifact resolution and validation.
//!
//! This module defines the artifact path newtype, the policy used to pick a
//! single artifact out of a candidate set, and the configuration errors
//! shared by every command builder.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::ASSEMBLIES_PROPERTY;

/// Path to a binary produced by a project build (e.g. `bin/Debug/Foo.dll`).
///
/// Ordered by path so that candidate sets iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArtifactPath(pub PathBuf);

impl ArtifactPath {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self(path.into())
  }

  pub fn as_path(&self) -> &Path {
    &self.0
  }

  /// Whether the artifact is present on disk.
  pub fn exists(&self) -> bool {
    self.0.is_file()
  }
}

impl AsRef<Path> for ArtifactPath {
  fn as_ref(&self) -> &Path {
    &self.0
  }
}

impl From<PathBuf> for ArtifactPath {
  fn from(path: PathBuf) -> Self {
    Self(path)
  }
}

impl fmt::Display for ArtifactPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0.display())
  }
}

/// How a single artifact is chosen when several candidates exist on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
  /// Take the first existing candidate in path order.
  #[default]
  First,
  /// Require exactly one existing candidate.
  Single,
}

/// Errors raised while validating artifacts or preparing a command.
///
/// All of these are configuration problems the user has to fix; none are
/// retried.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// The project reported no artifacts for the requested configuration.
  #[error("No assembly to scan. Please check your project plugin configuration ('{property}' property).")]
  NoArtifactFound { project: String, property: &'static str },

  /// Artifacts were named, but none of them exist (stale or missing build).
  #[error("Assembly to scan not found for project {project}: {path}")]
  ArtifactMissingOnDisk { project: String, path: ArtifactPath },

  /// Several artifacts exist while the policy requires a single one.
  #[error("Several assemblies to scan for project {project} ({count} found); configure exactly one")]
  AmbiguousArtifacts { project: String, count: usize },

  /// A required builder field was never set.
  #[error("{tool} command is not configured: missing {field}")]
  BuilderNotConfigured { tool: &'static str, field: &'static str },
}

impl ConfigError {
  pub(crate) fn no_artifact(project: &str) -> Self {
    ConfigError::NoArtifactFound {
      project: project.to_string(),
      property: ASSEMBLIES_PROPERTY,
    }
  }
}
