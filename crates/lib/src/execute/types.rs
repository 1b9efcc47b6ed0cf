//! Types for running tool invocations.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while running an external tool.
#[derive(Debug, Error)]
pub enum ExecuteError {
  /// The process could not be started (missing executable, permissions, ...).
  #[error("failed to start {program}: {source}")]
  Spawn {
    program: String,
    #[source]
    source: std::io::Error,
  },

  /// The process did not finish in time and was killed.
  #[error("{program} timed out after {after:?}")]
  Timeout { program: String, after: Duration },

  /// The process exited with a code outside the accepted set.
  #[error("command failed with exit code {code:?}: {cmd}")]
  CmdFailed { cmd: String, code: Option<i32> },

  /// I/O error while waiting for the process.
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// How a tool invocation is run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteOptions {
  /// Kill the process after this long. `None` waits forever.
  pub timeout: Option<Duration>,
  /// Exit codes treated as success.
  pub success_codes: Vec<i32>,
}

impl Default for ExecuteOptions {
  fn default() -> Self {
    Self {
      timeout: None,
      success_codes: vec![0],
    }
  }
}

/// Result of a finished tool run.
#[derive(Debug, Clone)]
pub struct ExecuteOutput {
  pub code: Option<i32>,
  pub stdout: String,
  pub stderr: String,
  pub elapsed: Duration,
}
