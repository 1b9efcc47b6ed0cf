//! Gallio XML report mapping.
//!
//! Every `testStepRun` whose `testStep` is a test case becomes one
//! [`TestCaseResult`]. Elements are matched by local name, so reports with
//! and without the `http://www.gallio.org/` namespace are accepted.

use std::path::PathBuf;
use std::time::Duration;

use roxmltree::{Document, Node};
use tracing::debug;

use super::types::{ReportError, TestCaseResult, TestDescription, TestReport, TestStatus};

const FAILURES_STREAM: &str = "Failures";

/// Parse the content of a Gallio XML report.
pub fn parse_report(content: &str) -> Result<TestReport, ReportError> {
  let doc = Document::parse(content.trim_start_matches('\u{feff}'))?;

  let root = doc.root_element();
  if !root.has_tag_name("report") {
    return Err(ReportError::UnexpectedRoot(root.tag_name().name().to_string()));
  }

  let mut results = Vec::new();
  for run in root.descendants().filter(|n| n.has_tag_name("testStepRun")) {
    let Some(step) = child(run, "testStep") else {
      continue;
    };
    if step.attribute("isTestCase") != Some("true") {
      continue;
    }
    results.push(map_test_case(run, step)?);
  }

  debug!(count = results.len(), "parsed Gallio report");
  Ok(TestReport { results })
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
  node.children().find(|n| n.has_tag_name(name))
}

fn map_test_case(run: Node, step: Node) -> Result<TestCaseResult, ReportError> {
  let test_name = step
    .attribute("fullName")
    .or_else(|| step.attribute("name"))
    .unwrap_or_default()
    .to_string();

  let description = map_description(step, &test_name)?;

  let result = child(run, "result");
  let status = result
    .and_then(|r| child(r, "outcome"))
    .and_then(|o| o.attribute("status"))
    .map(TestStatus::from_gallio)
    .unwrap_or(TestStatus::Error);

  let duration = match result.and_then(|r| r.attribute("duration")) {
    Some(value) => parse_duration(value).ok_or_else(|| invalid(&test_name, "duration", value))?,
    None => Duration::ZERO,
  };

  let assert_count = match result.and_then(|r| r.attribute("assertCount")) {
    Some(value) => value
      .trim()
      .parse()
      .map_err(|_| invalid(&test_name, "assertCount", value))?,
    None => 0,
  };

  Ok(TestCaseResult {
    description,
    status,
    duration,
    assert_count,
    message: failure_message(run),
  })
}

fn map_description(step: Node, test_name: &str) -> Result<TestDescription, ReportError> {
  let mut description = TestDescription::default();

  if let Some(reference) = child(step, "codeReference") {
    let attr = |name: &str| reference.attribute(name).unwrap_or_default().trim();

    description.assembly_name = attr("assembly").split(',').next().unwrap_or_default().trim().to_string();
    description.namespace = attr("namespace").to_string();
    description.class_name = class_name(attr("type"), &description.namespace);
    description.method_name = attr("member").to_string();
  }

  if let Some(location) = child(step, "codeLocation") {
    if let Some(line) = location.attribute("line") {
      description.line = line.trim().parse().map_err(|_| invalid(test_name, "line", line))?;
    }
    description.source_file = location
      .attribute("path")
      .map(str::trim)
      .filter(|p| !p.is_empty())
      .map(PathBuf::from);
  }

  Ok(description)
}

/// Strip the namespace from a full type name.
fn class_name(full_type: &str, namespace: &str) -> String {
  if !namespace.is_empty() {
    if let Some(rest) = full_type.strip_prefix(namespace).and_then(|r| r.strip_prefix('.')) {
      return rest.to_string();
    }
  }
  full_type.rsplit('.').next().unwrap_or_default().to_string()
}

/// Gallio durations are fractional seconds.
fn parse_duration(value: &str) -> Option<Duration> {
  let seconds: f64 = value.trim().parse().ok()?;
  // rejects negative, non-finite and out-of-range values
  Duration::try_from_secs_f64(seconds).ok()
}

/// Section titles and text of the `Failures` log stream.
fn failure_message(run: Node) -> Option<String> {
  let stream = child(run, "testLog")
    .and_then(|log| child(log, "streams"))?
    .children()
    .find(|n| n.has_tag_name("stream") && n.attribute("name") == Some(FAILURES_STREAM))?;

  let mut lines = Vec::new();
  for node in stream.descendants() {
    if node.has_tag_name("section") {
      if let Some(name) = node.attribute("name") {
        lines.push(name.trim().to_string());
      }
    } else if node.is_text() {
      let text = node.text().unwrap_or_default().trim();
      if !text.is_empty() {
        lines.push(text.to_string());
      }
    }
  }

  let message = lines.join("\n");
  (!message.is_empty()).then_some(message)
}

fn invalid(test: &str, attribute: &'static str, value: &str) -> ReportError {
  ReportError::InvalidAttribute {
    test: test.to_string(),
    attribute,
    value: value.to_string(),
  }
}
