use super::*;
use crate::net::types::ReportField;

fn report(fields: usize) -> Report {
    Report {
        id: "1".to_owned(),
        name: "Attendance".to_owned(),
        fields: (0..fields)
            .map(|i| ReportField { name: format!("f{i}"), label: None, kind: None })
            .collect(),
    }
}

fn settled(result: Result<Vec<Report>, &str>) -> FetchCycle<Vec<Report>> {
    let mut cycle = FetchCycle::default();
    let ticket = cycle.begin();
    cycle.complete(ticket, result);
    cycle
}

fn user(roles: &[&str]) -> User {
    User { id: "u1".to_owned(), name: "Ann".to_owned(), roles: roles.iter().map(|r| (*r).to_owned()).collect() }
}

// =============================================================
// Actions
// =============================================================

#[test]
fn user_without_permission_sees_submit_but_not_submissions() {
    let actions = report_actions(&report(1), Some(&user(&["roleReportEdit"])));
    assert_eq!(actions, ReportActions { submit: true, view_submissions: false });
}

#[test]
fn permitted_user_sees_both_actions() {
    let actions = report_actions(&report(1), Some(&user(&[app_permissions::ROLE_REPORT_VIEW_SUBMISSIONS])));
    assert_eq!(actions, ReportActions { submit: true, view_submissions: true });
}

#[test]
fn report_without_fields_hides_submit() {
    let actions = report_actions(&report(0), Some(&user(&[app_permissions::ROLE_REPORT_VIEW_SUBMISSIONS])));
    assert_eq!(actions, ReportActions { submit: false, view_submissions: true });
}

#[test]
fn anonymous_user_never_sees_submissions() {
    assert!(!report_actions(&report(2), None).view_submissions);
}

// =============================================================
// Empty state
// =============================================================

#[test]
fn empty_collection_shows_notice_and_no_items() {
    let state = settled(Ok(Vec::new()));
    assert!(shows_empty_notice(&state));
    assert!(visible_reports(&state).is_empty());
    assert_eq!(NO_REPORTS_NOTICE, "Sorry, No Reports Found!");
}

#[test]
fn loading_collection_hides_notice() {
    assert!(!shows_empty_notice(&FetchCycle::default()));
}

#[test]
fn failed_fetch_lists_nothing_and_shows_notice() {
    let state = settled(Err("network error: offline"));
    assert!(visible_reports(&state).is_empty());
    assert!(shows_empty_notice(&state));
}

#[test]
fn populated_collection_lists_reports_in_order() {
    let mut second = report(0);
    second.id = "2".to_owned();
    let state = settled(Ok(vec![report(1), second]));
    let ids: Vec<_> = visible_reports(&state).iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert!(!shows_empty_notice(&state));
}
