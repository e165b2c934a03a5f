use funnel_calc_studio::engine::{analyze_funnel, compute_what_if, FunnelConfig, Stage};
use funnel_calc_studio::input::{default_funnel, load_funnel};
use funnel_calc_studio::output::{
    read_report, render_terminal_report, render_what_if, validate_path, write_funnel_definition,
    write_json, write_report, write_svg, write_what_if, FunnelReport,
};
use funnel_calc_studio::utils::config::SCHEMA_VERSION;
use funnel_calc_studio::utils::error::OutputError;
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_config() -> FunnelConfig {
    FunnelConfig {
        average_order_value: 95.0,
        stages: vec![
            Stage::new("Landing", 100_000),
            Stage::new("Product", 75_000),
            Stage::new("Cart", 8_000),
            Stage::new("Checkout", 4_000),
            Stage::new("Purchase", 2_300),
        ],
    }
}

fn create_test_report() -> FunnelReport {
    let config = create_test_config();
    let analysis = analyze_funnel(&config).unwrap();
    let what_if = compute_what_if(&config.stages, 95.0, 1, 10.0, 12.0).unwrap();
    FunnelReport::new(&config, analysis, Some(what_if))
}

#[test]
fn test_report_priorities_and_friction() {
    let report = create_test_report();

    assert_eq!(report.version, SCHEMA_VERSION);
    assert_eq!(report.priorities, vec![1, 0, 2, 3]);
    assert_eq!(report.major_friction, vec![1]);
    assert!(report.what_if.is_some());
}

#[test]
fn test_write_and_read_report() {
    let report = create_test_report();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_report(&report, path).unwrap();
    let loaded = read_report(path).unwrap();

    assert_eq!(loaded.version, report.version);
    assert_eq!(loaded.stages, report.stages);
    assert_eq!(loaded.priorities, report.priorities);
    assert_eq!(loaded.transitions.len(), 4);
}

#[test]
fn test_report_without_what_if_omits_field() {
    let config = create_test_config();
    let report = FunnelReport::new(&config, analyze_funnel(&config).unwrap(), None);

    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("what_if").is_none());
    assert!(json.get("generated_at").is_some());
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/report.json");

    write_report(&create_test_report(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_svg_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/funnel.svg");
    let valid_svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;

    write_svg(valid_svg, &nested_path).unwrap();

    assert_eq!(std::fs::read_to_string(&nested_path).unwrap(), valid_svg);
}

#[test]
fn test_definition_round_trips_through_loader() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config = default_funnel(6);

    for name in ["funnel.toml", "funnel.json"] {
        let path = temp_dir.path().join(name);
        write_funnel_definition(&config, &path).unwrap();
        assert_eq!(load_funnel(&path).unwrap(), config);
    }
}

#[test]
fn test_definition_rejects_unknown_extension() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = write_funnel_definition(&default_funnel(5), temp_dir.path().join("funnel.txt"));
    assert!(result.is_err());
}

#[test]
fn test_terminal_report_mentions_every_transition() {
    colored::control::set_override(false);
    let rendered = render_terminal_report(&create_test_report());

    assert!(rendered.contains("Conversion Rate: 2.30%"));
    assert!(rendered.contains("Current Revenue: $218,500"));
    assert!(rendered.contains("Landing → Product"));
    assert!(rendered.contains("Checkout → Purchase"));
    assert!(rendered.contains("$54,625"));
    assert!(rendered.contains("Scenario Planning"));
}

#[test]
fn test_render_what_if_uses_period_label() {
    colored::control::set_override(false);
    let config = create_test_config();
    let result = compute_what_if(&config.stages, 95.0, 1, 10.0, 12.0).unwrap();

    let rendered = render_what_if(&result, Some("Annually"));
    assert!(rendered.contains("Annually revenue: $196,650"));
    assert!(rendered.contains("Additional conversions: +7,500"));
    assert!(rendered.contains("Current pass-through at this stage: 10.7%"));
}

#[test]
fn test_read_missing_report_is_read_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = read_report(temp_dir.path().join("missing.json"));

    let err = result.unwrap_err();
    assert!(matches!(err, OutputError::ReadFailed(_)));
    assert!(err.to_string().starts_with("Failed to read file"));
}

#[test]
fn test_read_malformed_report() {
    let temp_file = NamedTempFile::new().unwrap();
    std::fs::write(temp_file.path(), "{ not json").unwrap();

    let result = read_report(temp_file.path());
    assert!(matches!(result, Err(OutputError::SerializationFailed(_))));
}

#[test]
fn test_write_what_if_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("a/b/what_if.json");
    let config = create_test_config();
    let result = compute_what_if(&config.stages, 95.0, 0, 5.0, 3.0).unwrap();

    write_what_if(&result, &nested_path).unwrap();

    let loaded: funnel_calc_studio::engine::WhatIfResult =
        serde_json::from_str(&std::fs::read_to_string(&nested_path).unwrap()).unwrap();
    assert_eq!(loaded, result);
}

#[test]
fn test_write_json_rejects_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = write_json(&vec![1, 2, 3], temp_dir.path());
    assert!(matches!(result, Err(OutputError::InvalidPath(_))));
}
