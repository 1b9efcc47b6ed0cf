//! Test utilities for dotscan-lib.
//!
//! Provides an in-memory project descriptor and helpers to lay out fake
//! build outputs on disk.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use crate::project::ProjectDescriptor;

/// Project descriptor answering from a fixed table.
#[derive(Debug, Clone, Default)]
pub struct FakeProject {
  name: String,
  artifacts: BTreeMap<(String, Option<String>), BTreeSet<PathBuf>>,
}

impl FakeProject {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      artifacts: BTreeMap::new(),
    }
  }

  /// Register the artifacts generated for a configuration/platform pair.
  pub fn with_artifacts(mut self, configuration: &str, platform: Option<&str>, paths: &[impl AsRef<Path>]) -> Self {
    let key = (configuration.to_string(), platform.map(str::to_string));
    self
      .artifacts
      .entry(key)
      .or_default()
      .extend(paths.iter().map(|p| p.as_ref().to_path_buf()));
    self
  }
}

impl ProjectDescriptor for FakeProject {
  fn name(&self) -> &str {
    &self.name
  }

  fn generated_artifacts(&self, configuration: &str, platform: Option<&str>) -> BTreeSet<PathBuf> {
    let key = (configuration.to_string(), platform.map(str::to_string));
    self.artifacts.get(&key).cloned().unwrap_or_default()
  }
}

/// Create an empty file at `relative` under `root`, including parents.
pub fn touch(root: &Path, relative: &str) -> PathBuf {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).unwrap();
  }
  fs::write(&path, b"").unwrap();
  path
}

/// Returns the command and args to echo a message.
#[cfg(unix)]
pub fn echo_msg(msg: &str) -> (&'static str, Vec<String>) {
  ("/bin/echo", vec![msg.to_string()])
}

#[cfg(windows)]
pub fn echo_msg(msg: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), format!("echo {}", msg)])
}

/// Returns the shell command and args to execute a shell script.
#[cfg(unix)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("/bin/sh", vec!["-c".to_string(), script.to_string()])
}

#[cfg(windows)]
pub fn shell_cmd(script: &str) -> (&'static str, Vec<String>) {
  ("cmd.exe", vec!["/C".to_string(), script.to_string()])
}
