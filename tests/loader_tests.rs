use std::path::PathBuf;

use fbchart::ChartError;
use fbchart::core::MarkerRecord;
use fbchart::input::{load_markers, parse_markers};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn loads_numeric_records_with_defaults() {
    let records = load_markers(fixture("basic.json")).expect("load");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].position(), Some((1.0, 2.0)));
    assert_eq!(records[0].radius(), 0.5);
    assert_eq!(records[0].color_name(), "red");

    assert_eq!(records[1].position(), Some((3.0, 4.0)));
    assert_eq!(records[1].radius(), MarkerRecord::DEFAULT_RADIUS);
    assert_eq!(records[1].color_name(), "blue");
    assert_eq!(records[1].radius, None);
    assert_eq!(records[1].color, None);
}

#[test]
fn symbolic_string_normalizes_to_slot() {
    let records = parse_markers(r#"[{"fret": 1, "string": "E"}]"#).expect("parse");
    assert_eq!(records[0].string, Some(0.0));
}

#[test]
fn every_symbol_maps_to_its_slot() {
    for (symbol, slot) in [("E", 0.0), ("A", 1.0), ("D", 2.0), ("G", 3.0), ("B", 4.0), ("e", 5.0)] {
        let raw = format!(r#"[{{"fret": 0, "string": "{symbol}"}}]"#);
        let records = parse_markers(&raw).expect("parse");
        assert_eq!(records[0].string, Some(slot), "symbol {symbol}");
    }
}

#[test]
fn unknown_symbol_is_schema_error_naming_value_and_choices() {
    let err = load_markers(fixture("invalid_symbol.json")).expect_err("must fail");
    let ChartError::Schema(message) = err else {
        panic!("expected schema error, got {err:?}");
    };
    assert!(message.contains("'Z'"));
    assert!(message.contains("E, A, D, G, B, e"));
}

#[test]
fn lowercase_low_e_is_not_an_alias() {
    let err = parse_markers(r#"[{"fret": 1, "string": "a"}]"#).expect_err("must fail");
    assert!(matches!(err, ChartError::Schema(_)));
}

#[test]
fn non_list_top_level_is_schema_error() {
    let err = load_markers(fixture("not_a_list.json")).expect_err("must fail");
    assert!(matches!(err, ChartError::Schema(_)));

    let err = parse_markers("3").expect_err("must fail");
    assert!(matches!(err, ChartError::Schema(_)));
}

#[test]
fn invalid_json_is_malformed_input() {
    let err = load_markers(fixture("broken.json")).expect_err("must fail");
    assert!(matches!(err, ChartError::MalformedInput(_)));
}

#[test]
fn missing_file_is_malformed_input() {
    let err = load_markers(fixture("does_not_exist.json")).expect_err("must fail");
    let ChartError::MalformedInput(message) = err else {
        panic!("expected malformed input, got {err:?}");
    };
    assert!(message.contains("does not exist"));
}

#[test]
fn non_objects_are_skipped_and_order_is_kept() {
    let records = load_markers(fixture("symbolic.json")).expect("load");

    // Two non-object elements dropped, incomplete objects kept.
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].position(), Some((1.0, 0.0)));
    assert_eq!(records[1].position(), Some((5.0, 5.0)));
    assert_eq!(records[2].fret, Some(7.0));
    assert_eq!(records[2].string, None);
    assert_eq!(records[3].fret, None);
    assert_eq!(records[3].string, Some(3.0));
    assert_eq!(records[4].position(), Some((3.0, 2.0)));
}

#[test]
fn empty_list_loads_no_records() {
    let records = load_markers(fixture("empty.json")).expect("load");
    assert!(records.is_empty());
}

#[test]
fn numeric_string_values_pass_through_unchanged() {
    let records = parse_markers(r#"[{"fret": 2.5, "string": 1.25}]"#).expect("parse");
    assert_eq!(records[0].position(), Some((2.5, 1.25)));
}

#[test]
fn legacy_x_y_keys_are_accepted() {
    let records = parse_markers(r#"[{"x": 4, "y": 1}, {"fret": 2, "x": 9, "string": 0}]"#)
        .expect("parse");
    assert_eq!(records[0].position(), Some((4.0, 1.0)));
    assert_eq!(records[1].position(), Some((2.0, 0.0)));
}

#[test]
fn null_fields_count_as_absent() {
    let records = parse_markers(r#"[{"fret": 1, "string": null, "radius": null, "color": null}]"#)
        .expect("parse");
    assert_eq!(records[0].position(), None);
    assert_eq!(records[0].radius(), 0.5);
    assert_eq!(records[0].color_name(), "blue");
}

#[test]
fn mistyped_fields_are_schema_errors() {
    for raw in [
        r#"[{"fret": "3", "string": 1}]"#,
        r#"[{"fret": 3, "string": true}]"#,
        r#"[{"fret": 3, "string": 1, "radius": "big"}]"#,
        r#"[{"fret": 3, "string": 1, "color": 7}]"#,
    ] {
        let err = parse_markers(raw).expect_err(raw);
        assert!(matches!(err, ChartError::Schema(_)), "{raw}: {err:?}");
    }
}

#[test]
fn non_positive_radius_is_rejected() {
    for raw in [
        r#"[{"fret": 3, "string": 1, "radius": 0}]"#,
        r#"[{"fret": 3, "string": 1, "radius": -0.5}]"#,
    ] {
        let err = parse_markers(raw).expect_err(raw);
        assert!(matches!(err, ChartError::Schema(_)), "{raw}: {err:?}");
    }
}

#[test]
fn unknown_color_is_rejected_before_drawing() {
    let err = parse_markers(r#"[{"fret": 3, "string": 1, "color": "blurple"}]"#)
        .expect_err("must fail");
    let ChartError::Schema(message) = err else {
        panic!("expected schema error, got {err:?}");
    };
    assert!(message.contains("blurple"));
}

#[test]
fn bad_symbol_fails_whole_file_even_after_valid_records() {
    let err = parse_markers(
        r#"[{"fret": 1, "string": "E"}, {"fret": 2, "string": "A"}, {"fret": 3, "string": "H"}]"#,
    )
    .expect_err("must fail");
    assert!(matches!(err, ChartError::Schema(_)));
}
