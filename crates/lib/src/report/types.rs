//! Domain records produced from tool reports.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while reading a tool report.
#[derive(Debug, Error)]
pub enum ReportError {
  #[error("failed to read report {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid report XML: {0}")]
  Parse(#[from] roxmltree::Error),

  #[error("not a Gallio report (root element <{0}>)")]
  UnexpectedRoot(String),

  #[error("invalid {attribute} value {value:?} for test {test}")]
  InvalidAttribute {
    test: String,
    attribute: &'static str,
    value: String,
  },
}

/// Full description of a unit test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestDescription {
  pub assembly_name: String,
  pub namespace: String,
  pub class_name: String,
  pub method_name: String,
  /// Source line of the test method, 0 when unknown.
  pub line: u32,
  pub source_file: Option<PathBuf>,
}

impl TestDescription {
  /// `Namespace.Class.Method`, skipping empty parts.
  pub fn qualified_name(&self) -> String {
    [&self.namespace, &self.class_name, &self.method_name]
      .into_iter()
      .filter(|part| !part.is_empty())
      .map(String::as_str)
      .collect::<Vec<_>>()
      .join(".")
  }
}

impl fmt::Display for TestDescription {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "TestDescription[assembly_name={},namespace={},class_name={},method_name={},line={},source_file=",
      self.assembly_name, self.namespace, self.class_name, self.method_name, self.line
    )?;
    match &self.source_file {
      Some(path) => write!(f, "{}]", path.display()),
      None => write!(f, "<none>]"),
    }
  }
}

/// Outcome of a single test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestStatus {
  Passed,
  Failed,
  Skipped,
  Inconclusive,
  Error,
}

impl TestStatus {
  /// Map a Gallio outcome status; unknown values count as errors.
  pub fn from_gallio(status: &str) -> Self {
    match status.trim().to_ascii_lowercase().as_str() {
      "passed" => Self::Passed,
      "failed" => Self::Failed,
      "skipped" | "ignored" | "pending" => Self::Skipped,
      "inconclusive" => Self::Inconclusive,
      _ => Self::Error,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      Self::Passed => "passed",
      Self::Failed => "failed",
      Self::Skipped => "skipped",
      Self::Inconclusive => "inconclusive",
      Self::Error => "error",
    }
  }

  pub fn is_failure(&self) -> bool {
    matches!(self, Self::Failed | Self::Error)
  }
}

impl fmt::Display for TestStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// One executed test case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestCaseResult {
  pub description: TestDescription,
  pub status: TestStatus,
  #[serde(serialize_with = "serialize_millis")]
  pub duration: Duration,
  pub assert_count: u32,
  pub message: Option<String>,
}

fn serialize_millis<S: serde::Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.serialize_u64(duration.as_millis() as u64)
}

/// All test cases read from one report.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestReport {
  pub results: Vec<TestCaseResult>,
}

impl TestReport {
  pub fn count(&self, status: TestStatus) -> usize {
    self.results.iter().filter(|r| r.status == status).count()
  }

  pub fn failures(&self) -> impl Iterator<Item = &TestCaseResult> {
    self.results.iter().filter(|r| r.status.is_failure())
  }

  pub fn is_success(&self) -> bool {
    self.failures().next().is_none()
  }

  pub fn total_duration(&self) -> Duration {
    self.results.iter().map(|r| r.duration).sum()
  }
}
