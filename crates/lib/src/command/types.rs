//! The invocation value handed to the process executor.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};

/// An external-process invocation: executable plus ordered arguments.
///
/// Arguments are kept as OS strings so paths reach the process exactly as
/// they were given, without re-encoding or separator normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
  executable: PathBuf,
  arguments: Vec<OsString>,
}

impl CommandInvocation {
  pub fn new(executable: impl Into<PathBuf>) -> Self {
    Self {
      executable: executable.into(),
      arguments: Vec::new(),
    }
  }

  pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
    self.arguments.push(arg.as_ref().to_os_string());
    self
  }

  pub fn args<I, S>(mut self, args: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
  {
    self.arguments.extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
    self
  }

  pub fn executable(&self) -> &Path {
    &self.executable
  }

  pub fn arguments(&self) -> &[OsString] {
    &self.arguments
  }
}

impl fmt::Display for CommandInvocation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.executable.display())?;
    for arg in &self.arguments {
      let arg = arg.to_string_lossy();
      if arg.is_empty() || arg.contains(char::is_whitespace) {
        write!(f, " \"{}\"", arg)?;
      } else {
        write!(f, " {}", arg)?;
      }
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_quotes_arguments_with_spaces() {
    let invocation = CommandInvocation::new("DependencyParser.exe")
      .arg("-a")
      .arg("My Project/bin/Debug/App.dll");

    assert_eq!(
      invocation.to_string(),
      "DependencyParser.exe -a \"My Project/bin/Debug/App.dll\""
    );
  }

  #[test]
  fn arguments_keep_insertion_order() {
    let invocation = CommandInvocation::new("tool").args(["-x", "1"]).arg("-y");

    assert_eq!(invocation.arguments(), ["-x", "1", "-y"]);
  }
}
