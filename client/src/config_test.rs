use super::*;

#[test]
fn report_paths_are_keyed_by_id() {
    assert_eq!(report_submit_path("7"), "/reports/7/submit");
    assert_eq!(report_submissions_path("7"), "/reports/7/submissions");
}

#[test]
fn submissions_resource_nests_under_reports() {
    assert_eq!(report_submissions_resource("42"), "/api/reports/42/submissions");
}

#[test]
fn default_rows_per_page_is_offered() {
    assert!(ROWS_PER_PAGE_OPTIONS.contains(&DEFAULT_ROWS_PER_PAGE));
}

#[test]
fn default_submissions_limit_is_offered() {
    assert!(SUBMISSIONS_LIMIT_OPTIONS.contains(&DEFAULT_SUBMISSIONS_LIMIT));
}

#[test]
fn report_ids_are_encoded_as_one_segment() {
    assert_eq!(report_submit_path("a/b"), "/reports/a%2Fb/submit");
    assert_eq!(report_submissions_path("q?x#y"), "/reports/q%3Fx%23y/submissions");
    assert_eq!(report_submissions_resource("50% off"), "/api/reports/50%25%20off/submissions");
}

#[test]
fn plain_ids_are_unchanged() {
    assert_eq!(encode_segment("r-9_x.1~"), "r-9_x.1~");
}
