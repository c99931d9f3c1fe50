use super::*;
use serde_json::json;

fn row(value: serde_json::Value) -> Row {
    value.as_object().cloned().unwrap()
}

fn model() -> ColumnModel {
    ColumnModel::new(vec![
        ColumnDescriptor::new("name", "Name", true),
        ColumnDescriptor::new("notes", "Notes", false),
    ])
}

#[test]
fn descriptor_deserializes_server_spelling() {
    let col: ColumnDescriptor = serde_json::from_value(json!({ "name": "age", "label": "Age" })).unwrap();
    assert_eq!(col, ColumnDescriptor::new("age", "Age", true));
}

#[test]
fn descriptor_respects_explicit_sortable_flag() {
    let col: ColumnDescriptor =
        serde_json::from_value(json!({ "key": "notes", "label": "Notes", "sortable": false })).unwrap();
    assert!(!col.sortable);
}

#[test]
fn header_falls_back_to_key() {
    assert_eq!(ColumnDescriptor::new("email", "", true).header(), "email");
    assert_eq!(ColumnDescriptor::new("email", "Email", true).header(), "Email");
}

#[test]
fn model_preserves_insertion_order() {
    let keys: Vec<_> = model().columns().iter().map(|c| c.key.clone()).collect();
    assert_eq!(keys, vec!["name", "notes"]);
    assert_eq!(model().primary_key(), Some("name"));
}

#[test]
fn sortable_lookup_rejects_unknown_and_flagged_off_columns() {
    let m = model();
    assert!(m.is_sortable("name"));
    assert!(!m.is_sortable("notes"));
    assert!(!m.is_sortable("missing"));
}

#[test]
fn empty_model_has_no_primary_key() {
    let m = ColumnModel::default();
    assert!(m.is_empty());
    assert_eq!(m.primary_key(), None);
}

#[test]
fn unknown_column_key_renders_empty_cell() {
    let r = row(json!({ "name": "Alice" }));
    assert_eq!(cell_text(&r, "missing"), "");
}

#[test]
fn cell_text_formats_scalar_values() {
    let r = row(json!({ "s": "text", "n": 42, "f": 1.5, "t": true, "z": null, "a": [1, 2] }));
    assert_eq!(cell_text(&r, "s"), "text");
    assert_eq!(cell_text(&r, "n"), "42");
    assert_eq!(cell_text(&r, "f"), "1.5");
    assert_eq!(cell_text(&r, "t"), "Yes");
    assert_eq!(cell_text(&r, "z"), "");
    assert_eq!(cell_text(&r, "a"), "[1,2]");
}
