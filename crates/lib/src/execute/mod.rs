//! Running tool invocations.
//!
//! Takes a [`CommandInvocation`] produced by a builder and runs it as a child
//! process. Output is captured; the process is killed when the timeout
//! expires.

pub mod types;

use std::process::Stdio;
use std::time::Instant;

use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::command::CommandInvocation;

pub use types::{ExecuteError, ExecuteOptions, ExecuteOutput};

/// Run `invocation` to completion.
///
/// # Returns
///
/// The captured output when the exit code is one of
/// `options.success_codes`.
pub async fn run(invocation: &CommandInvocation, options: &ExecuteOptions) -> Result<ExecuteOutput, ExecuteError> {
  let program = invocation.executable().display().to_string();
  info!(cmd = %invocation, "executing command");

  let mut command = Command::new(invocation.executable());
  command
    .args(invocation.arguments())
    .stdin(Stdio::null())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .kill_on_drop(true);

  let started = Instant::now();
  let child = command.spawn().map_err(|source| ExecuteError::Spawn {
    program: program.clone(),
    source,
  })?;

  debug!(pid = ?child.id(), "spawned process");

  // Dropping the future on timeout drops the child, which kills it.
  let output = match options.timeout {
    Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
      Ok(output) => output?,
      Err(_) => {
        warn!(program = %program, timeout = ?limit, "command timed out");
        return Err(ExecuteError::Timeout { program, after: limit });
      }
    },
    None => child.wait_with_output().await?,
  };
  let elapsed = started.elapsed();

  let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
  let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
  let code = output.status.code();

  if !code.is_some_and(|c| options.success_codes.contains(&c)) {
    if !stderr.is_empty() {
      debug!(stderr = %stderr, "command stderr");
    }
    if !stdout.is_empty() {
      debug!(stdout = %stdout, "command stdout");
    }

    return Err(ExecuteError::CmdFailed {
      cmd: invocation.to_string(),
      code,
    });
  }

  info!(code = ?code, elapsed = ?elapsed, "command finished");

  Ok(ExecuteOutput {
    code,
    stdout,
    stderr,
    elapsed,
  })
}
