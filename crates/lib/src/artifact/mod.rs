//! Artifact resolution and validation.
//!
//! Resolution asks a project descriptor which binaries its build produces.
//! Validation checks those candidates against the filesystem and picks what
//! a tool should scan. Nothing here mutates state; validation only performs
//! existence checks.

pub mod types;

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::project::ProjectDescriptor;

pub use types::{ArtifactPath, ConfigError, SelectionPolicy};

/// Collect the candidate artifacts of `project` for a configuration/platform pair.
///
/// May legitimately return an empty set, e.g. for a project that declares no
/// output for that configuration.
pub fn resolve<P: ProjectDescriptor + ?Sized>(
  project: &P,
  configuration: &str,
  platform: Option<&str>,
) -> BTreeSet<ArtifactPath> {
  project
    .generated_artifacts(configuration, platform)
    .into_iter()
    .map(ArtifactPath::from)
    .collect()
}

/// Pick the single artifact to scan out of `candidates`.
///
/// Fails with `NoArtifactFound` when there are no candidates and with
/// `ArtifactMissingOnDisk` when none of them exists. Among the existing ones
/// the `policy` decides.
pub fn validate(
  project: &str,
  candidates: &BTreeSet<ArtifactPath>,
  policy: SelectionPolicy,
) -> Result<ArtifactPath, ConfigError> {
  let existing = validate_all(project, candidates)?;

  if policy == SelectionPolicy::Single && existing.len() > 1 {
    return Err(ConfigError::AmbiguousArtifacts {
      project: project.to_string(),
      count: existing.len(),
    });
  }

  // validate_all never returns an empty set
  let selected = existing
    .into_iter()
    .next()
    .ok_or_else(|| ConfigError::no_artifact(project))?;

  debug!(project = %project, artifact = %selected, "selected artifact to scan");
  Ok(selected)
}

/// Keep every candidate that exists on disk.
///
/// Same failure modes as [`validate`], without the single-selection step.
pub fn validate_all(
  project: &str,
  candidates: &BTreeSet<ArtifactPath>,
) -> Result<BTreeSet<ArtifactPath>, ConfigError> {
  let Some(first) = candidates.first() else {
    return Err(ConfigError::no_artifact(project));
  };

  let (existing, missing): (BTreeSet<_>, BTreeSet<_>) = candidates.iter().cloned().partition(ArtifactPath::exists);

  for path in &missing {
    debug!(project = %project, artifact = %path, "candidate artifact not on disk");
  }

  if existing.is_empty() {
    warn!(project = %project, artifact = %first, "no candidate artifact exists");
    return Err(ConfigError::ArtifactMissingOnDisk {
      project: project.to_string(),
      path: first.clone(),
    });
  }

  Ok(existing)
}
