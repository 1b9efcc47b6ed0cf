//! NDeps dependency analyzer command.
//!
//! The wrapped tool is invoked as `DependencyParser.exe -a <assembly> -o <report>`.
//! It reads flag values positionally, so the flag/value pairs must stay in
//! that order.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::artifact::{self, ArtifactPath, ConfigError, SelectionPolicy};
use crate::consts::DEFAULT_BUILD_CONFIGURATION;
use crate::project::ProjectDescriptor;

use super::{CommandBuilder, CommandInvocation, required};

const TOOL_NAME: &str = "NDeps";

/// Assemble the NDeps invocation for an already validated artifact.
pub fn build(executable: &Path, artifact: &ArtifactPath, report_file: &Path) -> CommandInvocation {
  CommandInvocation::new(executable)
    .arg("-a")
    .arg(artifact.as_path())
    .arg("-o")
    .arg(report_file)
}

/// Builder for the dependency analysis of a single project.
///
/// The builder is ready once both the executable and the report file are set.
#[derive(Debug)]
pub struct NDepsCommandBuilder<'a, P: ProjectDescriptor + ?Sized> {
  project: &'a P,
  configuration: String,
  platform: Option<String>,
  policy: SelectionPolicy,
  executable: Option<PathBuf>,
  report_file: Option<PathBuf>,
}

impl<'a, P: ProjectDescriptor + ?Sized> NDepsCommandBuilder<'a, P> {
  pub fn new(project: &'a P) -> Self {
    Self {
      project,
      configuration: DEFAULT_BUILD_CONFIGURATION.to_string(),
      platform: None,
      policy: SelectionPolicy::default(),
      executable: None,
      report_file: None,
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

  pub fn selection(mut self, policy: SelectionPolicy) -> Self {
    self.policy = policy;
    self
  }

  pub fn executable(mut self, executable: impl Into<PathBuf>) -> Self {
    self.executable = Some(executable.into());
    self
  }

  pub fn report_file(mut self, report_file: impl Into<PathBuf>) -> Self {
    self.report_file = Some(report_file.into());
    self
  }

  /// Whether every required field is set.
  pub fn is_ready(&self) -> bool {
    self.executable.is_some() && self.report_file.is_some()
  }
}

impl<P: ProjectDescriptor + ?Sized> CommandBuilder for NDepsCommandBuilder<'_, P> {
  fn tool_name(&self) -> &'static str {
    TOOL_NAME
  }

  fn to_command(&self) -> Result<CommandInvocation, ConfigError> {
    let project = self.project.name();
    let candidates = artifact::resolve(self.project, &self.configuration, self.platform.as_deref());
    let assembly = artifact::validate(project, &candidates, self.policy)?;

    let executable = required(self.executable.as_deref(), TOOL_NAME, "executable")?;
    let report_file = required(self.report_file.as_deref(), TOOL_NAME, "report file")?;

    info!(project = %project, assembly = %assembly, report = %report_file.display(), "prepared NDeps command");
    Ok(build(executable, &assembly, report_file))
  }
}
