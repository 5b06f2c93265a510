use fbchart::api::{ChartConfig, compose_frame};
use fbchart::core::{MarkerRecord, VerticalBoundsPolicy};
use fbchart::input::parse_markers;
use proptest::prelude::*;
use serde_json::{Value, json};

const SYMBOLS: [&str; 6] = ["E", "A", "D", "G", "B", "e"];

fn entry_strategy() -> impl Strategy<Value = Value> {
    let fret = prop::option::of(-30i32..60);
    let string = prop::option::of(prop_oneof![
        (0usize..6).prop_map(|slot| json!(SYMBOLS[slot])),
        (-8.0f64..12.0).prop_map(|value| json!(value)),
    ]);
    prop_oneof![
        8 => (fret, string).prop_map(|(fret, string)| {
            let mut entry = serde_json::Map::new();
            if let Some(fret) = fret {
                entry.insert("fret".to_owned(), json!(fret));
            }
            if let Some(string) = string {
                entry.insert("string".to_owned(), string);
            }
            Value::Object(entry)
        }),
        1 => Just(json!("not a marker")),
        1 => Just(json!(7)),
    ]
}

fn policy_strategy() -> impl Strategy<Value = VerticalBoundsPolicy> {
    prop_oneof![
        Just(VerticalBoundsPolicy::FixedSlots),
        Just(VerticalBoundsPolicy::DataDriven),
    ]
}

proptest! {
    #[test]
    fn drawn_markers_match_complete_objects_in_order(
        entries in prop::collection::vec(entry_strategy(), 0..64),
        policy in policy_strategy(),
    ) {
        let raw = Value::Array(entries.clone()).to_string();
        let records = parse_markers(&raw).expect("valid input");

        let expected: Vec<f64> = entries
            .iter()
            .filter_map(Value::as_object)
            .filter(|entry| entry.contains_key("fret") && entry.contains_key("string"))
            .filter_map(|entry| entry["fret"].as_f64())
            .collect();

        let frame = compose_frame(records, ChartConfig::default().with_vertical_bounds(policy))
            .expect("frame");
        let drawn: Vec<f64> = frame.circles.iter().map(|circle| circle.cx).collect();
        prop_assert_eq!(drawn, expected);
    }

    #[test]
    fn exactly_six_string_lines_and_finite_geometry(
        frets in prop::collection::vec((-100.0f64..100.0, -20.0f64..20.0), 0..48),
        spacing in 1u32..5,
        policy in policy_strategy(),
    ) {
        let records: Vec<MarkerRecord> = frets
            .into_iter()
            .map(|(fret, string)| MarkerRecord::new(fret, string))
            .collect();
        let config = ChartConfig::default()
            .with_vertical_bounds(policy)
            .with_grid_spacing(spacing);

        let first = compose_frame(records.clone(), config.clone()).expect("first frame");
        let second = compose_frame(records, config).expect("second frame");

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.horizontal_lines().count(), 6);
        prop_assert_eq!(first.axes.y_ticks.len(), 6);
        prop_assert!(first.validate().is_ok());
        prop_assert!(first.vertical_lines().all(|line|
            line.x1 >= first.viewport.x_min.floor() && line.x1 <= first.viewport.x_max
        ));
    }
}
