use super::*;
use serde_json::json;

// =============================================================
// Report
// =============================================================

#[test]
fn report_accepts_numeric_id() {
    let report: Report = serde_json::from_value(json!({ "id": 1, "name": "Attendance", "fields": [{ "name": "f1" }] })).unwrap();
    assert_eq!(report.id, "1");
    assert_eq!(report.name, "Attendance");
    assert_eq!(report.fields.len(), 1);
    assert!(report.is_submittable());
}

#[test]
fn report_accepts_string_id() {
    let report: Report = serde_json::from_value(json!({ "id": "r-9", "name": "Giving" })).unwrap();
    assert_eq!(report.id, "r-9");
}

#[test]
fn report_missing_or_null_fields_are_empty() {
    let missing: Report = serde_json::from_value(json!({ "id": 2, "name": "A" })).unwrap();
    let null: Report = serde_json::from_value(json!({ "id": 3, "name": "B", "fields": null })).unwrap();
    assert!(missing.fields.is_empty());
    assert!(null.fields.is_empty());
    assert!(!null.is_submittable());
}

#[test]
fn report_rejects_object_id() {
    let result = serde_json::from_value::<Report>(json!({ "id": { "x": 1 }, "name": "A" }));
    assert!(result.is_err());
}

#[test]
fn report_field_reads_type_and_label() {
    let field: ReportField = serde_json::from_value(json!({ "name": "count", "label": "Head count", "type": "number" })).unwrap();
    assert_eq!(field.kind.as_deref(), Some("number"));
    assert_eq!(field.display_label(), "Head count");
}

#[test]
fn report_field_label_falls_back_to_name() {
    let field: ReportField = serde_json::from_value(json!({ "name": "count", "label": "" })).unwrap();
    assert_eq!(field.display_label(), "count");
}

// =============================================================
// SubmissionsPage
// =============================================================

#[test]
fn submissions_page_parses_columns_and_rows() {
    let page: SubmissionsPage = serde_json::from_value(json!({
        "columns": [{ "key": "name", "label": "Name", "sortable": true }],
        "data": [{ "name": "B" }, { "name": "A" }]
    }))
    .unwrap();
    assert_eq!(page.columns, vec![ColumnDescriptor::new("name", "Name", true)]);
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0]["name"], json!("B"));
}

#[test]
fn submissions_page_defaults_missing_columns_to_empty() {
    let page: SubmissionsPage = serde_json::from_value(json!({ "data": [] })).unwrap();
    assert!(page.columns.is_empty());
    assert!(page.data.is_empty());

    let page: SubmissionsPage = serde_json::from_value(json!({ "columns": null, "data": null })).unwrap();
    assert!(page.columns.is_empty());
}

// =============================================================
// User
// =============================================================

#[test]
fn user_roles_default_to_empty() {
    let user: User = serde_json::from_value(json!({ "id": 5, "name": "Ann" })).unwrap();
    assert_eq!(user.id, "5");
    assert!(user.roles.is_empty());
}

#[test]
fn user_roles_are_read() {
    let user: User =
        serde_json::from_value(json!({ "id": "u1", "name": "Ann", "roles": ["roleReportViewSubmissions"] })).unwrap();
    assert_eq!(user.roles, vec!["roleReportViewSubmissions".to_owned()]);
}
