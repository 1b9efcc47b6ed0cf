//! Gallio test runner command.
//!
//! Runs every test assembly of the given projects in one `Gallio.Echo.exe`
//! invocation and asks for an XML report:
//!
//! ```text
//! Gallio.Echo.exe /r:<runner> /report-directory:<dir> /report-name-format:<name>
//!                 /report-type:Xml [/f:<filter>] <assembly>...
//! ```

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::artifact::{self, ArtifactPath, ConfigError};
use crate::consts::DEFAULT_BUILD_CONFIGURATION;
use crate::project::ProjectDescriptor;

use super::{CommandBuilder, CommandInvocation, required};

const TOOL_NAME: &str = "Gallio";

/// Default isolation mode of the test runner.
pub const DEFAULT_RUNNER: &str = "IsolatedProcess";

/// Default report name (without extension).
pub const DEFAULT_REPORT_NAME: &str = "gallio-report";

/// Builder for a test run over one or more test projects.
pub struct GallioCommandBuilder<'a> {
  projects: Vec<&'a dyn ProjectDescriptor>,
  configuration: String,
  platform: Option<String>,
  runner: String,
  filter: Option<String>,
  report_name: String,
  executable: Option<PathBuf>,
  report_directory: Option<PathBuf>,
}

impl<'a> GallioCommandBuilder<'a> {
  pub fn new(projects: Vec<&'a dyn ProjectDescriptor>) -> Self {
    Self {
      projects,
      configuration: DEFAULT_BUILD_CONFIGURATION.to_string(),
      platform: None,
      runner: DEFAULT_RUNNER.to_string(),
      filter: None,
      report_name: DEFAULT_REPORT_NAME.to_string(),
      executable: None,
      report_directory: None,
    }
  }

  pub fn configuration(mut self, configuration: impl Into<String>) -> Self {
    self.configuration = configuration.into();
    self
  }

  pub fn platform(mut self, platform: Option<String>) -> Self {
    self.platform = platform;
    self
  }

  pub fn runner(mut self, runner: impl Into<String>) -> Self {
    self.runner = runner.into();
    self
  }

  pub fn filter(mut self, filter: Option<String>) -> Self {
    self.filter = filter;
    self
  }

  pub fn report_name(mut self, name: impl Into<String>) -> Self {
    self.report_name = name.into();
    self
  }

  pub fn executable(mut self, executable: impl Into<PathBuf>) -> Self {
    self.executable = Some(executable.into());
    self
  }

  pub fn report_directory(mut self, directory: impl Into<PathBuf>) -> Self {
    self.report_directory = Some(directory.into());
    self
  }

  /// Where Gallio writes its XML report, once a report directory is set.
  pub fn report_file(&self) -> Option<PathBuf> {
    self
      .report_directory
      .as_ref()
      .map(|dir| dir.join(format!("{}.xml", self.report_name)))
  }

  /// Validated test assemblies, project by project.
  fn test_assemblies(&self) -> Result<Vec<ArtifactPath>, ConfigError> {
    let Some(first) = self.projects.first() else {
      return Err(ConfigError::no_artifact("<no test project>"));
    };

    let mut assemblies = Vec::new();
    let mut seen = BTreeSet::new();
    for project in &self.projects {
      let candidates = artifact::resolve(*project, &self.configuration, self.platform.as_deref());
      for assembly in artifact::validate_all(project.name(), &candidates)? {
        if seen.insert(assembly.clone()) {
          assemblies.push(assembly);
        }
      }
    }

    if assemblies.is_empty() {
      return Err(ConfigError::no_artifact(first.name()));
    }
    Ok(assemblies)
  }
}

/// Gallio reads `/option:value` switches, so values are glued to their flag.
fn switch(name: &str, value: impl AsRef<std::ffi::OsStr>) -> OsString {
  let mut arg = OsString::from(format!("/{}:", name));
  arg.push(value);
  arg
}

/// Assemble the Gallio invocation for already validated assemblies.
pub fn build(
  executable: &Path,
  runner: &str,
  report_directory: &Path,
  report_name: &str,
  filter: Option<&str>,
  assemblies: &[ArtifactPath],
) -> CommandInvocation {
  let mut invocation = CommandInvocation::new(executable)
    .arg(switch("r", runner))
    .arg(switch("report-directory", report_directory))
    .arg(switch("report-name-format", report_name))
    .arg(switch("report-type", "Xml"));

  if let Some(filter) = filter {
    invocation = invocation.arg(switch("f", filter));
  }

  invocation.args(assemblies.iter().map(ArtifactPath::as_path))
}

impl CommandBuilder for GallioCommandBuilder<'_> {
  fn tool_name(&self) -> &'static str {
    TOOL_NAME
  }

  fn to_command(&self) -> Result<CommandInvocation, ConfigError> {
    let assemblies = self.test_assemblies()?;

    let executable = required(self.executable.as_deref(), TOOL_NAME, "executable")?;
    let report_directory = required(self.report_directory.as_deref(), TOOL_NAME, "report directory")?;

    info!(
      assemblies = assemblies.len(),
      report_directory = %report_directory.display(),
      "prepared Gallio command"
    );

    Ok(build(
      executable,
      &self.runner,
      report_directory,
      &self.report_name,
      self.filter.as_deref(),
      &assemblies,
    ))
  }
}
