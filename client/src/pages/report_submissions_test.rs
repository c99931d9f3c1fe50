use super::*;
use crate::table::paging::Pagination;
use crate::table::prepare::{Layout, prepare_rows};
use crate::table::sort::initial_sort;
use serde_json::json;

fn ready(page: SubmissionsPage) -> FetchCycle<SubmissionsPage> {
    let mut cycle = FetchCycle::default();
    let ticket = cycle.begin();
    cycle.complete::<String>(ticket, Ok(page));
    cycle
}

fn attendance() -> Report {
    Report { id: "1".to_owned(), name: "Attendance".to_owned(), fields: vec![] }
}

#[test]
fn initial_filter_requests_default_limit() {
    assert_eq!(initial_filter(), json!({ "limit": 5000 }).as_object().cloned().unwrap());
}

#[test]
fn title_names_the_report() {
    assert_eq!(submissions_title(&attendance()), "Attendance submissions");
}

#[test]
fn submissions_scenario_sorts_by_name_initially() {
    let page: SubmissionsPage = serde_json::from_value(json!({
        "columns": [{ "key": "name", "label": "Name", "sortable": true }],
        "data": [{ "name": "B" }, { "name": "A" }]
    }))
    .unwrap();
    let cycle = ready(page);
    let model = ColumnModel::new(page_columns(&cycle));
    let sort = initial_sort(&model, Some(INITIAL_SORT_COLUMN));
    let prepared = prepare_rows(
        &page_rows(&cycle),
        sort.as_ref(),
        Pagination::new(DEFAULT_ROWS_PER_PAGE),
        Layout::Table,
    );
    let names: Vec<_> = prepared.rows.iter().map(|r| r["name"].clone()).collect();
    assert_eq!(names, vec![json!("A"), json!("B")]);
}

#[test]
fn missing_page_yields_no_columns_or_rows() {
    let cycle = FetchCycle::<SubmissionsPage>::default();
    assert!(page_columns(&cycle).is_empty());
    assert!(page_rows(&cycle).is_empty());
}

#[test]
fn submission_card_is_titled_with_report_name() {
    let columns = vec![ColumnDescriptor::new("name", "Name", true), ColumnDescriptor::new("location", "Location", true)];
    let row = json!({ "name": "bob", "location": "Kampala" }).as_object().cloned().unwrap();
    let card = submission_card("Attendance", &columns, &row);
    assert_eq!(card.primary, "Attendance");
    assert_eq!(card.avatar, "A");
    assert_eq!(card.secondary, "Location: Kampala");
}

#[test]
fn failed_reload_keeps_rows_on_screen() {
    let page: SubmissionsPage = serde_json::from_value(json!({
        "columns": [{ "key": "name", "label": "Name" }],
        "data": [{ "name": "A" }, { "name": "B" }]
    }))
    .unwrap();
    let mut cycle = ready(page);

    // Limit changed, then the request failed.
    let ticket = cycle.begin();
    cycle.complete(ticket, Err("request failed: 500"));

    assert_eq!(page_columns(&cycle), vec![ColumnDescriptor::new("name", "Name", true)]);
    assert_eq!(page_rows(&cycle).len(), 2);
}
