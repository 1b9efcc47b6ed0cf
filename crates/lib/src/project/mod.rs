//! Project descriptors.
//!
//! A project descriptor is the bookkeeping of one build unit: it knows which
//! binaries its build produces for a given configuration and platform.
//! `VisualStudioProject` follows MSBuild output conventions and can be loaded
//! from a project file with [`msbuild::load_project`].

pub mod msbuild;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use msbuild::{ProjectError, load_project};

/// A build unit that knows which artifacts its build generates.
pub trait ProjectDescriptor {
  /// Human-readable project name, used in error messages.
  fn name(&self) -> &str;

  /// Paths of the binaries produced for `configuration` and `platform`.
  ///
  /// May be empty, e.g. when nothing is configured for this pair.
  fn generated_artifacts(&self, configuration: &str, platform: Option<&str>) -> BTreeSet<PathBuf>;
}

/// Kind of binary a project compiles to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputKind {
  #[default]
  Library,
  Exe,
  WinExe,
  Module,
}

impl OutputKind {
  /// Parse an MSBuild `OutputType` value (case-insensitive).
  pub fn from_output_type(value: &str) -> Option<Self> {
    match value.trim().to_ascii_lowercase().as_str() {
      "library" => Some(Self::Library),
      "exe" => Some(Self::Exe),
      "winexe" => Some(Self::WinExe),
      "module" => Some(Self::Module),
      _ => None,
    }
  }

  /// File extension of the produced binary.
  pub fn extension(&self) -> &'static str {
    match self {
      Self::Library => "dll",
      Self::Exe | Self::WinExe => "exe",
      Self::Module => "netmodule",
    }
  }
}

/// A C# or VB.NET project laid out the way MSBuild builds it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualStudioProject {
  pub name: String,
  /// Directory holding the project file; output paths are relative to it.
  pub directory: PathBuf,
  pub assembly_name: String,
  pub output_kind: OutputKind,
  /// Explicit assembly paths replacing the `bin/` convention.
  ///
  /// `$(Configuration)`, `$(Platform)` and `$(AssemblyName)` are substituted.
  pub assembly_patterns: Vec<String>,
}

impl VisualStudioProject {
  pub fn new(name: impl Into<String>, directory: impl Into<PathBuf>, assembly_name: impl Into<String>) -> Self {
    Self {
      name: name.into(),
      directory: directory.into(),
      assembly_name: assembly_name.into(),
      output_kind: OutputKind::default(),
      assembly_patterns: Vec::new(),
    }
  }

  pub fn with_output_kind(mut self, kind: OutputKind) -> Self {
    self.output_kind = kind;
    self
  }

  pub fn with_assembly_patterns(mut self, patterns: Vec<String>) -> Self {
    self.assembly_patterns = patterns;
    self
  }

  /// File name of the compiled assembly, e.g. `Example.Core.dll`.
  pub fn assembly_file_name(&self) -> String {
    format!("{}.{}", self.assembly_name, self.output_kind.extension())
  }

  /// Conventional output path for one configuration.
  fn conventional_artifact(&self, configuration: &str, platform: Option<&str>) -> PathBuf {
    let mut dir = self.directory.join("bin");
    if let Some(platform) = platform {
      dir.push(platform);
    }
    dir.join(configuration).join(self.assembly_file_name())
  }

  fn expand_pattern(&self, pattern: &str, configuration: &str, platform: Option<&str>) -> PathBuf {
    let expanded = pattern
      .replace("$(Configuration)", configuration)
      .replace("$(Platform)", platform.unwrap_or(""))
      .replace("$(AssemblyName)", &self.assembly_name);
    self.directory.join(expanded)
  }
}

impl ProjectDescriptor for VisualStudioProject {
  fn name(&self) -> &str {
    &self.name
  }

  fn generated_artifacts(&self, configuration: &str, platform: Option<&str>) -> BTreeSet<PathBuf> {
    let platform = platform.filter(|p| !is_any_cpu(p));
    let mut artifacts = BTreeSet::new();

    for configuration in split_configurations(configuration) {
      if self.assembly_patterns.is_empty() {
        artifacts.insert(self.conventional_artifact(configuration, platform));
      } else {
        for pattern in &self.assembly_patterns {
          artifacts.insert(self.expand_pattern(pattern, configuration, platform));
        }
      }
    }

    debug!(project = %self.name, count = artifacts.len(), "resolved generated artifacts");
    artifacts
  }
}

/// Split a comma-separated configuration list, dropping blank entries.
pub fn split_configurations(configurations: &str) -> impl Iterator<Item = &str> {
  configurations.split(',').map(str::trim).filter(|c| !c.is_empty())
}

/// `AnyCPU` builds land directly under `bin/<configuration>`.
fn is_any_cpu(platform: &str) -> bool {
  let normalized: String = platform.chars().filter(|c| !c.is_whitespace()).collect();
  normalized.eq_ignore_ascii_case("anycpu") || normalized.is_empty()
}

/// Project directory of a project file path.
pub(crate) fn project_dir(project_file: &Path) -> PathBuf {
  project_file
    .parent()
    .map(Path::to_path_buf)
    .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn project() -> VisualStudioProject {
    VisualStudioProject::new("Example.Core", "/src/Example.Core", "Example.Core")
  }

  #[test]
  fn library_debug_artifact_follows_bin_convention() {
    let artifacts = project().generated_artifacts("Debug", None);

    assert_eq!(
      artifacts.into_iter().collect::<Vec<_>>(),
      vec![PathBuf::from("/src/Example.Core/bin/Debug/Example.Core.dll")]
    );
  }

  #[test]
  fn platform_adds_a_directory_level() {
    let artifacts = project().generated_artifacts("Release", Some("x64"));

    assert!(artifacts.contains(&PathBuf::from("/src/Example.Core/bin/x64/Release/Example.Core.dll")));
  }

  #[test]
  fn any_cpu_platform_is_ignored() {
    for platform in ["AnyCPU", "Any CPU", "anycpu"] {
      let artifacts = project().generated_artifacts("Debug", Some(platform));
      assert!(
        artifacts.contains(&PathBuf::from("/src/Example.Core/bin/Debug/Example.Core.dll")),
        "platform {platform}"
      );
    }
  }

  #[test]
  fn comma_separated_configurations_yield_one_artifact_each() {
    let artifacts = project().generated_artifacts("Debug, Release,,", None);

    assert_eq!(artifacts.len(), 2);
  }

  #[test]
  fn blank_configuration_yields_nothing() {
    assert!(project().generated_artifacts("  ", None).is_empty());
  }

  #[test]
  fn executables_use_exe_extension() {
    let project = project().with_output_kind(OutputKind::WinExe);

    assert_eq!(project.assembly_file_name(), "Example.Core.exe");
  }

  #[test]
  fn patterns_replace_convention() {
    let project = project().with_assembly_patterns(vec![
      "out/$(Configuration)/$(AssemblyName).dll".to_string(),
      "out/$(Configuration)/Extra.dll".to_string(),
    ]);

    let artifacts = project.generated_artifacts("Release", None);

    assert_eq!(
      artifacts.into_iter().collect::<Vec<_>>(),
      vec![
        PathBuf::from("/src/Example.Core/out/Release/Example.Core.dll"),
        PathBuf::from("/src/Example.Core/out/Release/Extra.dll"),
      ]
    );
  }

  #[test]
  fn output_type_parsing() {
    assert_eq!(OutputKind::from_output_type("Library"), Some(OutputKind::Library));
    assert_eq!(OutputKind::from_output_type(" exe "), Some(OutputKind::Exe));
    assert_eq!(OutputKind::from_output_type("WinExe"), Some(OutputKind::WinExe));
    assert_eq!(OutputKind::from_output_type("Database"), None);
  }
}
