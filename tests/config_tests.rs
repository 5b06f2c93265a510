use std::path::PathBuf;

use fbchart::ChartError;
use fbchart::api::ChartConfig;
use fbchart::core::{CanvasSize, VerticalBoundsPolicy};

#[test]
fn defaults_match_reference_chart() {
    let config = ChartConfig::default();
    assert_eq!(config.canvas, CanvasSize::new(640, 480));
    assert_eq!(config.grid_spacing, 1);
    assert_eq!(config.vertical_bounds, VerticalBoundsPolicy::FixedSlots);
    assert_eq!(config.marker_alpha, 0.5);
    assert_eq!(config.title, "FBChart grid");
    assert!(config.validate().is_ok());
}

#[test]
fn partial_json_config_keeps_other_defaults() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/config_data_driven.json");
    let config = ChartConfig::from_json_file(path).expect("config");

    assert_eq!(config.vertical_bounds, VerticalBoundsPolicy::DataDriven);
    assert_eq!(config.grid_spacing, 2);
    assert_eq!(config.title, "Scale shape");
    assert_eq!(config.x_label, "X");
    assert_eq!(config.canvas, CanvasSize::default());
}

#[test]
fn config_round_trips_through_json() {
    let config = ChartConfig::default().with_vertical_bounds(VerticalBoundsPolicy::DataDriven);
    let raw = serde_json::to_string(&config).expect("encode");
    assert!(raw.contains("\"data_driven\""));
    assert_eq!(ChartConfig::from_json_str(&raw).expect("decode"), config);
}

#[test]
fn invalid_values_are_rejected() {
    for raw in [
        r#"{"grid_spacing": 0}"#,
        r#"{"marker_alpha": 0.0}"#,
        r#"{"marker_alpha": 1.5}"#,
        r#"{"grid_line_width": -1.0}"#,
        r#"{"canvas": {"width": 0, "height": 100}}"#,
    ] {
        assert!(ChartConfig::from_json_str(raw).is_err(), "{raw}");
    }
}

#[test]
fn unreadable_config_is_malformed_input() {
    let err = ChartConfig::from_json_file("tests/fixtures/missing_config.json").expect_err("missing");
    assert!(matches!(err, ChartError::MalformedInput(_)));

    let err = ChartConfig::from_json_str("{ nope").expect_err("broken");
    assert!(matches!(err, ChartError::MalformedInput(_)));
}
