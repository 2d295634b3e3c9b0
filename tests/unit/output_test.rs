//! Tests for the output module
//!
//! Reporters turn a result set into JSON, YAML, a table or a JUnit report.

use ci_component_lint::LintError;
use ci_component_lint::core::models::{ResultSet, Severity};
use ci_component_lint::output::{
    JsonReporter, JunitReporter, OutputFormat, Reporter, TableReporter, YamlReporter,
};

use super::common::{outcome, sample_results};

// =============================================================================
// OutputFormat Tests
// =============================================================================

#[test]
fn output_format_default() {
    assert_eq!(OutputFormat::default(), OutputFormat::Table);
}

#[test]
fn output_format_names() {
    let parsed: Vec<OutputFormat> = ["json", "yaml", "table", "junit", "none"]
        .iter()
        .map(|name| name.parse().unwrap())
        .collect();

    assert_eq!(parsed, OutputFormat::ALL);
}

#[test]
fn output_format_unknown() {
    for name in ["xml", "JSON", "", "sarif"] {
        let err = name.parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, LintError::UnsupportedFormat(_)), "{name}");
        assert!(err.to_string().contains("unsupported output format"));
    }
}

// =============================================================================
// JUnit Tests
// =============================================================================

#[test]
fn junit_counters() {
    let out = JunitReporter::default().render(&sample_results()).unwrap();

    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(out.contains(r#"tests="3""#));
    assert!(out.contains(r#"errors="1""#));
    assert!(out.contains(r#"failures="1""#));
    assert!(out.contains(r#"disabled="0" skipped="0""#));
}

#[test]
fn junit_failure_only_on_failed_outcomes() {
    let out = JunitReporter::default().render(&sample_results()).unwrap();

    assert_eq!(out.matches("<testcase ").count(), 3);
    assert_eq!(out.matches("<failure>").count(), 2);
    assert!(out.contains(r#"<testcase name="TestRule1"></testcase>"#));
    assert!(out.contains("<failure>Error message</failure>"));
    assert!(out.contains("<failure>Warning message</failure>"));
}

#[test]
fn junit_counts_only_failed_errors_as_errors() {
    let results: ResultSet = vec![
        outcome("a", true, "", Severity::Error),
        outcome("b", false, "b", Severity::Error),
        outcome("c", false, "c", Severity::Error),
    ]
    .into();

    let out = JunitReporter::default().render(&results).unwrap();

    assert!(out.contains(r#"errors="2" failures="0" tests="3""#));
}

#[test]
fn junit_custom_suite_name() {
    let out = JunitReporter::new("my suite").render(&sample_results()).unwrap();
    assert!(out.contains(r#"<testsuite name="my suite" id="0""#));
}

// =============================================================================
// JSON / YAML Tests
// =============================================================================

#[test]
fn json_contains_fields() {
    let out = JsonReporter.render(&sample_results()).unwrap();

    assert!(out.contains(r#""name": "TestRule1""#));
    assert!(out.contains(r#""severity": "warning""#));
    assert!(out.contains(r#""metadata": {}"#));
}

#[test]
fn yaml_contains_fields() {
    let out = YamlReporter.render(&sample_results()).unwrap();

    assert!(out.contains("name: TestRule1"));
    assert!(out.contains("severity: warning"));
}

#[test]
fn json_and_yaml_agree() {
    let results = sample_results();

    let from_json: ResultSet =
        serde_json::from_str(&JsonReporter.render(&results).unwrap()).unwrap();
    let from_yaml: ResultSet =
        serde_yaml::from_str(&YamlReporter.render(&results).unwrap()).unwrap();

    assert_eq!(from_json, from_yaml);
    assert_eq!(from_json, results);
}

// =============================================================================
// Table Tests
// =============================================================================

#[test]
fn table_rows_in_order() {
    let out = TableReporter::plain().render(&sample_results()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Name"));
    assert!(lines[1].starts_with("TestRule1"));
    assert!(lines[2].starts_with("TestRule2"));
    assert!(lines[3].starts_with("TestRule3"));
}

#[test]
fn table_columns_align() {
    let out = TableReporter::plain().render(&sample_results()).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    let column = lines[0].find("Success").unwrap();
    for line in &lines[1..] {
        let cell = &line[column..];
        assert!(cell.starts_with("true") || cell.starts_with("false"), "{line}");
    }
}

// =============================================================================
// ResultSet::render Tests
// =============================================================================

#[test]
fn render_none_is_empty() {
    assert!(sample_results().render(OutputFormat::None).unwrap().is_empty());
}

#[test]
fn render_matches_reporters() {
    let results = sample_results();

    assert_eq!(
        results.render(OutputFormat::Json).unwrap(),
        JsonReporter.render(&results).unwrap()
    );
    assert_eq!(
        results.render(OutputFormat::Junit).unwrap(),
        JunitReporter::default().render(&results).unwrap()
    );
}
