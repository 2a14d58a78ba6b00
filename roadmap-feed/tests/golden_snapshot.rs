use std::fs;

use roadmap_core::{RoadmapConfig, RoadmapError};
use roadmap_feed::{build_snapshot_str, parse_events_str, parse_events_value};
use serde_json::Value;

fn fixture_path(name: &str) -> String {
    format!("{}/tests/data/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn release_log_matches_golden_snapshot() {
    let feed =
        fs::read_to_string(fixture_path("release_log.json")).expect("Không đọc được feed mẫu");

    let snapshot =
        build_snapshot_str(&feed, &RoadmapConfig::default()).expect("Không dựng được snapshot");

    let mut actual = serde_json::to_value(snapshot).expect("Không serialize snapshot");
    normalize_dynamic_fields(&mut actual);

    let expected = fs::read_to_string(fixture_path("release_log_snapshot.json"))
        .expect("Không đọc được golden snapshot");

    let mut expected_value: Value = serde_json::from_str(&expected).expect("Golden không hợp lệ");
    normalize_dynamic_fields(&mut expected_value);

    assert_eq!(actual, expected_value);
}

#[test]
fn wrapper_and_bare_array_forms_are_equivalent() {
    let feed =
        fs::read_to_string(fixture_path("release_log.json")).expect("Không đọc được feed mẫu");
    let value: Value = serde_json::from_str(&feed).expect("Feed không hợp lệ");
    let bare = value.get("events").cloned().expect("Feed thiếu khóa events");

    let from_wrapper = parse_events_value(&value).expect("Không đọc được dạng bọc");
    let from_array = parse_events_value(&bare).expect("Không đọc được dạng mảng");

    assert_eq!(from_wrapper, from_array);
    assert_eq!(from_wrapper.len(), 6);
}

#[test]
fn non_collection_input_is_missing_data() {
    let err = parse_events_str("42").expect_err("Số trần phải bị từ chối");
    assert!(matches!(err, RoadmapError::MissingData));

    let err = parse_events_str("{\"records\": []}").expect_err("Thiếu khóa events phải bị từ chối");
    assert!(matches!(err, RoadmapError::MissingData));
}

#[test]
fn malformed_record_is_a_parse_error() {
    let err = parse_events_str("[{\"id\": \"x\"}]").expect_err("Bản ghi hỏng phải bị từ chối");
    assert!(matches!(err, RoadmapError::Parse(_)));
}

/// Thay các trường động và làm tròn vị trí trước khi so sánh.
fn normalize_dynamic_fields(value: &mut Value) {
    if let Some(obj) = value.as_object_mut() {
        if obj.contains_key("generated_at") {
            obj.insert(
                "generated_at".to_string(),
                Value::String("__DYNAMIC_TIMESTAMP__".to_string()),
            );
        }
    }
    round_marker_positions(value);
}

fn round_marker_positions(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, entry) in map.iter_mut() {
                if key == "position" {
                    if let Some(number) = entry.as_f64() {
                        *entry = Value::from((number * 10_000.0).round() / 10_000.0);
                    }
                } else {
                    round_marker_positions(entry);
                }
            }
        }
        Value::Array(items) => {
            for item in items.iter_mut() {
                round_marker_positions(item);
            }
        }
        _ => {}
    }
}
