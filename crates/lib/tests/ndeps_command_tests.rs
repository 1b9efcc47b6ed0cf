//! End-to-end tests for NDeps command construction.
//!
//! A project descriptor reports its generated assemblies; the builder
//! validates them on disk and produces the `-a <assembly> -o <report>`
//! invocation.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use dotscan_lib::artifact::ConfigError;
use dotscan_lib::command::{CommandBuilder, NDepsCommandBuilder};
use dotscan_lib::project::{ProjectDescriptor, VisualStudioProject, load_project};
use tempfile::TempDir;

/// Descriptor whose generated assemblies are set by the test.
struct StubProject {
  assemblies: BTreeSet<PathBuf>,
}

impl ProjectDescriptor for StubProject {
  fn name(&self) -> &str {
    "Example.Core"
  }

  fn generated_artifacts(&self, configuration: &str, platform: Option<&str>) -> BTreeSet<PathBuf> {
    if configuration == "Debug" && platform.is_none() {
      self.assemblies.clone()
    } else {
      BTreeSet::new()
    }
  }
}

fn touch(path: &Path) {
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, b"").unwrap();
}

fn to_unix_style(path: &str) -> String {
  path.replace('\\', "/")
}

struct Runner {
  temp: TempDir,
  executable: PathBuf,
  report: PathBuf,
}

impl Runner {
  fn new() -> Self {
    let temp = TempDir::new().unwrap();
    let executable = temp.path().join("Runner/FakeProg/DependencyParser.exe");
    touch(&executable);
    let report = temp.path().join("target/sonar/Deps/deps-report.xml");
    Self {
      temp,
      executable,
      report,
    }
  }

  fn build(&self, project: &dyn ProjectDescriptor) -> Result<Vec<String>, ConfigError> {
    let command = NDepsCommandBuilder::new(project)
      .executable(&self.executable)
      .report_file(&self.report)
      .to_command()?;

    assert!(to_unix_style(&command.executable().display().to_string()).ends_with("/Runner/FakeProg/DependencyParser.exe"));
    Ok(
      command
        .arguments()
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect(),
    )
  }
}

#[test]
fn command_for_built_project() {
  let runner = Runner::new();
  let assembly = runner.temp.path().join("Runner/FakeAssemblies/Fake1.assembly");
  touch(&assembly);
  let project = StubProject {
    assemblies: BTreeSet::from([assembly]),
  };

  let args = runner.build(&project).unwrap();

  assert_eq!(args.len(), 4);
  assert_eq!(args[0], "-a");
  assert!(args[1].ends_with("Fake1.assembly"));
  assert_eq!(args[2], "-o");
  assert!(args[3].ends_with("deps-report.xml"));
}

#[test]
fn command_without_assembly() {
  let runner = Runner::new();
  let project = StubProject {
    assemblies: BTreeSet::new(),
  };

  let err = runner.build(&project).unwrap_err();

  assert!(matches!(err, ConfigError::NoArtifactFound { .. }));
  assert_eq!(
    err.to_string(),
    "No assembly to scan. Please check your project plugin configuration ('assemblies' property)."
  );
}

#[test]
fn command_with_unexisting_assembly() {
  let runner = Runner::new();
  let project = StubProject {
    assemblies: BTreeSet::from([runner.temp.path().join("target/sonar/Deps/unexisting-assembly.dll")]),
  };

  let err = runner.build(&project).unwrap_err();

  assert!(matches!(err, ConfigError::ArtifactMissingOnDisk { .. }));
  assert!(err.to_string().contains("Assembly to scan not found for project Example.Core"));
}

#[test]
fn paths_are_passed_through_unmodified() {
  let runner = Runner::new();
  let assembly = runner.temp.path().join("My Projects").join("weird name (1).dll");
  touch(&assembly);
  let project = StubProject {
    assemblies: BTreeSet::from([assembly.clone()]),
  };

  let args = runner.build(&project).unwrap();

  assert_eq!(args[1], assembly.display().to_string());
  assert_eq!(args[3], runner.report.display().to_string());
}

#[test]
fn command_for_loaded_project_file() {
  let runner = Runner::new();
  let project_dir = runner.temp.path().join("Example.Core");
  fs::create_dir_all(&project_dir).unwrap();
  let fixture = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/Example.Core/Example.Core.csproj");
  fs::copy(&fixture, project_dir.join("Example.Core.csproj")).unwrap();

  let project: VisualStudioProject = load_project(&project_dir.join("Example.Core.csproj")).unwrap();

  // Not built yet.
  assert!(matches!(
    runner.build(&project),
    Err(ConfigError::ArtifactMissingOnDisk { .. })
  ));

  touch(&project.directory.join("bin/Debug/Example.Core.dll"));
  let args = runner.build(&project).unwrap();

  assert!(to_unix_style(&args[1]).ends_with("Example.Core/bin/Debug/Example.Core.dll"));
}
