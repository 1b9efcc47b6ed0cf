//! Loading project descriptors from MSBuild project files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use super::{OutputKind, VisualStudioProject, project_dir};

/// Errors that can occur while loading a project file.
#[derive(Debug, Error)]
pub enum ProjectError {
  #[error("failed to read project file {path}: {source}")]
  Read {
    path: PathBuf,
    #[source]
    source: io::Error,
  },

  #[error("invalid project file {path}: {source}")]
  Parse {
    path: PathBuf,
    #[source]
    source: roxmltree::Error,
  },

  #[error("{0} is not an MSBuild project (missing <Project> root)")]
  NotAProject(PathBuf),
}

/// Load a `.csproj`/`.vbproj` file into a [`VisualStudioProject`].
///
/// Reads `AssemblyName` and `OutputType` from the first property group that
/// declares them. The assembly name defaults to the file stem and the output
/// kind to `Library`, as MSBuild does.
pub fn load_project(path: &Path) -> Result<VisualStudioProject, ProjectError> {
  let content = fs::read_to_string(path).map_err(|source| ProjectError::Read {
    path: path.to_path_buf(),
    source,
  })?;

  let path = dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
  parse_project(&path, &content)
}

/// Parse project file `content` as if read from `path`.
pub fn parse_project(path: &Path, content: &str) -> Result<VisualStudioProject, ProjectError> {
  let doc = roxmltree::Document::parse(content.trim_start_matches('\u{feff}')).map_err(|source| ProjectError::Parse {
    path: path.to_path_buf(),
    source,
  })?;

  let root = doc.root_element();
  if !root.has_tag_name("Project") {
    return Err(ProjectError::NotAProject(path.to_path_buf()));
  }

  let property = |name: &str| -> Option<String> {
    root
      .descendants()
      .filter(|n| n.has_tag_name(name))
      .filter(|n| n.parent_element().is_some_and(|p| p.has_tag_name("PropertyGroup")))
      .filter_map(|n| n.text())
      .map(str::trim)
      .find(|t| !t.is_empty())
      .map(str::to_string)
  };

  let stem = path
    .file_stem()
    .map(|s| s.to_string_lossy().into_owned())
    .unwrap_or_default();

  let assembly_name = property("AssemblyName").unwrap_or_else(|| stem.clone());

  let output_kind = match property("OutputType") {
    Some(value) => OutputKind::from_output_type(&value).unwrap_or_else(|| {
      warn!(project = %stem, output_type = %value, "unknown OutputType, assuming Library");
      OutputKind::Library
    }),
    None => OutputKind::Library,
  };

  debug!(project = %stem, assembly = %assembly_name, ?output_kind, "loaded project file");

  Ok(VisualStudioProject::new(stem, project_dir(path), assembly_name).with_output_kind(output_kind))
}
