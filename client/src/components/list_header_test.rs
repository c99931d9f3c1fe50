use super::*;
use serde_json::json;

fn filter(value: serde_json::Value) -> Filter {
    value.as_object().cloned().unwrap()
}

#[test]
fn filter_limit_reads_integer_limit() {
    assert_eq!(filter_limit(&filter(json!({ "limit": 5000 }))), Some(5000));
}

#[test]
fn filter_limit_ignores_missing_or_non_integer() {
    assert_eq!(filter_limit(&filter(json!({}))), None);
    assert_eq!(filter_limit(&filter(json!({ "limit": "all" }))), None);
    assert_eq!(filter_limit(&filter(json!({ "limit": -1 }))), None);
}

#[test]
fn with_limit_replaces_limit_and_keeps_other_params() {
    let next = with_limit(&filter(json!({ "limit": 5000, "status": "open" })), 100);
    assert_eq!(next, filter(json!({ "limit": 100, "status": "open" })));
}
