//! Tool report parsing.
//!
//! Maps the XML reports written by the wrapped tools into domain records.

pub mod gallio;
pub mod types;

use std::fs;
use std::path::Path;

pub use gallio::parse_report;
pub use types::{ReportError, TestCaseResult, TestDescription, TestReport, TestStatus};

/// Read and parse a Gallio report file.
pub fn load_gallio_report(path: &Path) -> Result<TestReport, ReportError> {
  let content = fs::read_to_string(path).map_err(|source| ReportError::Read {
    path: path.to_path_buf(),
    source,
  })?;
  parse_report(&content)
}
