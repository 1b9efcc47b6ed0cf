//! Tests for mapping a complete Gallio report.

use std::path::PathBuf;
use std::time::Duration;

use dotscan_lib::report::{ReportError, TestStatus, load_gallio_report};

fn fixture(name: &str) -> PathBuf {
  PathBuf::from(env!("CARGO_MANIFEST_DIR"))
    .join("tests")
    .join("fixtures")
    .join(name)
}

#[test]
fn maps_every_test_case() {
  let report = load_gallio_report(&fixture("gallio-report.xml")).unwrap();

  assert_eq!(report.results.len(), 3);
  assert_eq!(report.count(TestStatus::Passed), 1);
  assert_eq!(report.count(TestStatus::Failed), 1);
  assert_eq!(report.count(TestStatus::Skipped), 1);
  assert!(!report.is_success());
}

#[test]
fn maps_descriptions() {
  let report = load_gallio_report(&fixture("gallio-report.xml")).unwrap();

  let passed = &report.results[0];
  assert_eq!(passed.description.assembly_name, "Example.Core.Tests");
  assert_eq!(passed.description.namespace, "Example.Core.Tests");
  assert_eq!(passed.description.class_name, "CalculatorTest");
  assert_eq!(passed.description.method_name, "Add_TwoNumbers_ReturnsSum");
  assert_eq!(passed.description.line, 14);
  assert_eq!(
    passed.description.source_file,
    Some(PathBuf::from(r"C:\work\Example\Example.Core.Tests\CalculatorTest.cs"))
  );
  assert_eq!(passed.duration, Duration::from_micros(31_250));

  let skipped = &report.results[2];
  assert_eq!(skipped.description.class_name, "ParserTest");
  assert_eq!(skipped.status, TestStatus::Skipped);
}

#[test]
fn keeps_failure_message() {
  let report = load_gallio_report(&fixture("gallio-report.xml")).unwrap();

  let failed: Vec<_> = report.failures().collect();
  assert_eq!(failed.len(), 1);
  assert_eq!(failed[0].description.method_name, "Divide_ByZero_Throws");
  assert_eq!(
    failed[0].message.as_deref(),
    Some("Expected the block to throw an exception.\nExpected Exception Type : System.DivideByZeroException")
  );
}

#[test]
fn missing_report_is_a_read_error() {
  let result = load_gallio_report(&fixture("missing-report.xml"));

  assert!(matches!(result, Err(ReportError::Read { .. })));
}

#[test]
fn project_file_is_not_a_report() {
  let result = load_gallio_report(&fixture("Example.Core/Example.Core.csproj"));

  assert!(matches!(result, Err(ReportError::UnexpectedRoot(ref root)) if root == "Project"));
}
