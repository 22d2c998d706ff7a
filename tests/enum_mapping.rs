//! End-to-end tests for the wire/form representation seam
//!
//! These tests verify that:
//! 1. Backend rows (display-valued on the wire) convert to symbolic keys
//!    via the canonical enum table
//! 2. The typed model and the dynamic converter agree on the mapping
//! 3. Malformed rows degrade field-by-field instead of failing
//!
//! Run with: cargo test --test enum_mapping

use film_inventory::enums::{convert_enum_values_to_keys, EnumDef, EnumTable};
use film_inventory::types::{film_enum_table, FilmEvent, FilmFormat, FilmType};
use serde_json::json;

/// A realistic page of backend rows, as PostgREST would return them.
fn backend_rows() -> serde_json::Value {
    json!([
        {
            "id": 1,
            "created_at": "2024-01-15T09:30:00Z",
            "name": "Tri-X",
            "brand": "Kodak",
            "film_type": "Black and White",
            "film_format": "35mm",
            "iso": 400,
            "date_acquired": "2024-01-10",
            "source": "local shop",
            "event_log": [
                { "date": "2024-01-10T00:00:00Z", "event": "Acquired" },
                { "date": "2024-02-02T00:00:00Z", "event": "Used" },
                { "date": "2024-02-10T00:00:00Z", "event": "Developed" }
            ]
        },
        {
            "id": 2,
            "created_at": "2024-03-01T18:00:00Z",
            "name": "Provia 100F",
            "brand": "Fujifilm",
            "film_type": "Slide",
            "film_format": "120",
            "iso": 100,
            "date_acquired": "2024-02-28",
            "source": "ebay",
            "event_log": null,
            "expiry_date": "2007-01"
        }
    ])
}

#[test]
fn test_backend_page_converts_to_keys() {
    let converted = convert_enum_values_to_keys(&backend_rows(), &film_enum_table());

    let rows = converted.as_array().expect("page stays an array");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0]["film_type"], json!("black_and_white"));
    assert_eq!(rows[0]["film_format"], json!("_35mm"));
    assert_eq!(
        rows[0]["event_log"],
        json!([
            { "date": "2024-01-10T00:00:00Z", "event": "acquired" },
            { "date": "2024-02-02T00:00:00Z", "event": "used" },
            { "date": "2024-02-10T00:00:00Z", "event": "developed" }
        ])
    );

    assert_eq!(rows[1]["film_type"], json!("slide"));
    assert_eq!(rows[1]["film_format"], json!("_120"));
    // null event_log is a primitive, copied as-is
    assert_eq!(rows[1]["event_log"], json!(null));
    // non-enum fields survive untouched
    assert_eq!(rows[1]["expiry_date"], json!("2007-01"));
    assert_eq!(rows[0]["iso"], json!(400));
}

#[test]
fn test_typed_model_and_converter_agree() {
    let table = film_enum_table();
    for film_type in FilmType::ALL {
        let row = json!({ "film_type": film_type.display() });
        let converted = convert_enum_values_to_keys(&row, &table);
        assert_eq!(converted["film_type"], json!(film_type.key()));
    }
    for format in FilmFormat::ALL {
        let row = json!({ "film_format": format.display() });
        let converted = convert_enum_values_to_keys(&row, &table);
        assert_eq!(converted["film_format"], json!(format.key()));
    }
    for event in FilmEvent::ALL {
        let row = json!({ "event": event.display() });
        let converted = convert_enum_values_to_keys(&row, &table);
        assert_eq!(converted["event"], json!(event.key()));
    }
}

#[test]
fn test_malformed_rows_degrade_without_failing() {
    let rows = json!([
        { "film_type": "Kodachrome" },
        { "film_type": 64 },
        { "film_format": { "display": "35mm" } },
        { "event_log": [{ "event": "Misfiled" }, { "event": "Used" }] }
    ]);
    let converted = convert_enum_values_to_keys(&rows, &film_enum_table());

    assert_eq!(converted[0]["film_type"], json!(null));
    assert_eq!(converted[1]["film_type"], json!(null));
    assert_eq!(converted[2]["film_format"], json!(null));
    // per-element degradation inside the log, good entries still convert
    assert_eq!(converted[3]["event_log"][0]["event"], json!(null));
    assert_eq!(converted[3]["event_log"][1]["event"], json!("used"));
}

#[test]
fn test_caller_supplied_table_extends_the_canonical_one() {
    // the presentation layer may register extra definitions; unrelated
    // fields keep converting the same way
    let table = film_enum_table().with_field(
        "process",
        EnumDef::from_pairs([("push_one", "Pushed +1"), ("normal", "Box speed")]),
    );
    let row = json!({ "film_type": "Color", "process": "Pushed +1" });
    let converted = convert_enum_values_to_keys(&row, &table);
    assert_eq!(converted["film_type"], json!("color"));
    assert_eq!(converted["process"], json!("push_one"));
}

#[test]
fn test_empty_page_and_empty_table() {
    assert_eq!(
        convert_enum_values_to_keys(&json!([]), &film_enum_table()),
        json!([])
    );
    assert_eq!(
        convert_enum_values_to_keys(&backend_rows(), &EnumTable::new()),
        backend_rows()
    );
}
