//! Implementation of the `dotscan report` command.
//!
//! Reads a Gallio XML report and prints its test results.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use owo_colors::{OwoColorize, Stream};

use dotscan_lib::report::{TestCaseResult, TestReport, TestStatus, load_gallio_report};

use crate::output::{OutputFormat, format_duration, print_json, print_success, print_warning, symbols};

#[derive(Debug, Args)]
pub struct ReportArgs {
  /// Gallio XML report file
  pub file: PathBuf,

  /// Only list failed tests
  #[arg(long)]
  pub failed_only: bool,
}

pub fn cmd_report(args: ReportArgs, format: OutputFormat) -> Result<()> {
  let report = load_gallio_report(&args.file)
    .with_context(|| format!("Failed to read Gallio report: {}", args.file.display()))?;

  print_test_report(&report, args.failed_only, format)
}

pub fn print_test_report(report: &TestReport, failed_only: bool, format: OutputFormat) -> Result<()> {
  if format.is_json() {
    let results: Vec<&TestCaseResult> = report
      .results
      .iter()
      .filter(|r| !failed_only || r.status.is_failure())
      .collect();
    return print_json(&serde_json::json!({
      "total": report.results.len(),
      "passed": report.count(TestStatus::Passed),
      "failed": report.count(TestStatus::Failed),
      "errors": report.count(TestStatus::Error),
      "skipped": report.count(TestStatus::Skipped),
      "inconclusive": report.count(TestStatus::Inconclusive),
      "results": results,
    }));
  }

  for result in &report.results {
    if failed_only && !result.status.is_failure() {
      continue;
    }
    print_result(result);
  }

  let summary = format!(
    "{} tests: {} passed, {} failed, {} skipped ({})",
    report.results.len(),
    report.count(TestStatus::Passed),
    report.count(TestStatus::Failed) + report.count(TestStatus::Error),
    report.count(TestStatus::Skipped) + report.count(TestStatus::Inconclusive),
    format_duration(report.total_duration())
  );

  println!();
  if report.is_success() {
    print_success(&summary);
  } else {
    print_warning(&summary);
  }

  Ok(())
}

fn print_result(result: &TestCaseResult) {
  let description = &result.description;
  let location = match &description.source_file {
    Some(path) => format!(" ({}:{})", path.display(), description.line),
    None => String::new(),
  };

  let symbol = match result.status {
    TestStatus::Passed => symbols::SUCCESS,
    TestStatus::Failed | TestStatus::Error => symbols::ERROR,
    TestStatus::Skipped | TestStatus::Inconclusive => symbols::SKIPPED,
  };

  println!(
    "  {} {} [{}]{}",
    symbol.if_supports_color(Stream::Stdout, |s| s.bold()),
    description.qualified_name(),
    result.status,
    location.if_supports_color(Stream::Stdout, |s| s.dimmed())
  );

  if let Some(message) = &result.message {
    for line in message.lines() {
      println!("      {} {}", symbols::ARROW, line);
    }
  }
}
