//! Implementation of the `dotscan deps` command.
//!
//! Builds the NDeps invocation for a project, then runs it unless
//! `--dry-run` is given.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use tracing::debug;

use dotscan_lib::command::{CommandBuilder, CommandInvocation, NDepsCommandBuilder};
use dotscan_lib::execute::{self, ExecuteOptions};
use dotscan_lib::project::load_project;
use dotscan_lib::settings::AnalysisSettings;

use crate::output::{OutputFormat, format_duration, print_json, print_success};

#[derive(Debug, Args)]
pub struct DepsArgs {
  /// Project file (.csproj or .vbproj) to analyze
  #[arg(short, long)]
  pub project: PathBuf,

  /// Build configuration(s), comma separated (overrides settings)
  #[arg(long)]
  pub configuration: Option<String>,

  /// Build platform, e.g. x64 (overrides settings)
  #[arg(long)]
  pub platform: Option<String>,

  /// Path to DependencyParser.exe (overrides settings)
  #[arg(long)]
  pub executable: Option<PathBuf>,

  /// Report file to write (default: <report_dir>/Deps/deps-report.xml)
  #[arg(long)]
  pub report: Option<PathBuf>,

  /// Print the command instead of running it
  #[arg(long)]
  pub dry_run: bool,
}

pub fn cmd_deps(args: DepsArgs, settings: &AnalysisSettings, format: OutputFormat) -> Result<()> {
  let project = load_project(&args.project)
    .with_context(|| format!("Failed to load project: {}", args.project.display()))?
    .with_assembly_patterns(settings.assemblies.clone());

  let report = args
    .report
    .unwrap_or_else(|| settings.report_dir.join("Deps").join("deps-report.xml"));

  let mut builder = NDepsCommandBuilder::new(&project)
    .configuration(args.configuration.unwrap_or_else(|| settings.build_configurations.clone()))
    .platform(args.platform.or_else(|| settings.build_platform.clone()))
    .selection(settings.selection)
    .report_file(&report);
  if let Some(executable) = args.executable.or_else(|| settings.ndeps_executable.clone()) {
    builder = builder.executable(executable);
  }

  let command = builder.to_command()?;
  debug!(project = %project.name, %command, "built NDeps command");

  if args.dry_run {
    return print_command(&command, format);
  }

  if let Some(parent) = report.parent().filter(|p| !p.as_os_str().is_empty()) {
    fs::create_dir_all(parent).with_context(|| format!("Failed to create report directory: {}", parent.display()))?;
  }

  let options = ExecuteOptions {
    timeout: settings.timeout()?,
    ..Default::default()
  };

  let rt = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;
  let output = rt
    .block_on(execute::run(&command, &options))
    .with_context(|| format!("{} failed for project {}", builder.tool_name(), project.name))?;

  if format.is_json() {
    print_json(&json!({
      "project": project.name,
      "report": report,
      "exit_code": output.code,
      "elapsed_ms": output.elapsed.as_millis() as u64,
    }))?;
  } else {
    print_success(&format!(
      "Dependency report for {} written to {} ({})",
      project.name,
      report.display(),
      format_duration(output.elapsed)
    ));
  }

  Ok(())
}

/// Print an invocation without running it.
pub fn print_command(command: &CommandInvocation, format: OutputFormat) -> Result<()> {
  if format.is_json() {
    let arguments: Vec<_> = command
      .arguments()
      .iter()
      .map(|a| a.to_string_lossy().into_owned())
      .collect();
    print_json(&json!({
      "executable": command.executable(),
      "arguments": arguments,
    }))
  } else {
    println!("{}", command);
    Ok(())
  }
}
