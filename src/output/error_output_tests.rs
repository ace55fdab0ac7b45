use std::path::PathBuf;

use super::*;

fn render(use_colors: bool, error: &BikeshareError) -> String {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(use_colors).write_error(&mut buf, error);
    String::from_utf8(buf).unwrap()
}

#[test]
fn config_error_without_colors() {
    let err = BikeshareError::Config("sample_size must be greater than 0".to_string());
    assert_eq!(
        render(false, &err),
        "✖ Config: sample_size must be greater than 0\n  help: Check the config file format, or run `bikeshare config validate`\n"
    );
}

#[test]
fn data_source_error_has_detail_and_help() {
    let err = BikeshareError::DataSource {
        path: PathBuf::from("data/chicago.csv"),
        reason: "cannot open file: No such file or directory".to_string(),
    };
    let out = render(false, &err);
    assert!(out.starts_with("✖ DataSource: "));
    assert!(out.contains("  × cannot open file: No such file or directory\n"));
    assert!(out.contains("  help: "));
    assert!(out.contains("--data-dir"));
}

#[test]
fn missing_columns_listed_in_detail() {
    let err = BikeshareError::MissingColumns {
        path: PathBuf::from("washington.csv"),
        columns: vec!["Start Time".to_string(), "User Type".to_string()],
    };
    let out = render(false, &err);
    assert!(out.contains("Start Time"));
    assert!(out.contains("User Type"));
}

#[test]
fn colored_error_uses_ansi_codes() {
    let err = BikeshareError::InputClosed;
    let out = render(true, &err);
    assert!(out.contains(ansi::RED));
    assert!(out.contains(ansi::BOLD));
    assert!(out.contains(ansi::RESET));
}

#[test]
fn warning_without_colors() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(&mut buf, "skipping sample", Some("no rows"));
    let out = String::from_utf8(buf).unwrap();
    assert_eq!(out, "⚠ Warning: skipping sample\n  × no rows\n");
}

#[test]
fn multi_line_detail_is_indented_per_line() {
    let mut buf = Vec::new();
    ErrorOutput::with_colors(false).write_warning(&mut buf, "parse", Some("line one\nline two"));
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("  × line one\n  × line two\n"));
}
