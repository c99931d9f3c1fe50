//! Route, permission, and table defaults shared across the reports UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! Remote routes address the backend through the `/api` prefix that the host
//! server forwards; local routes are the client-side router paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped inside one path segment (WHATWG path-segment set).
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Backend resources consumed by the reports pages.
pub mod remote_routes {
    /// Report collection; submissions live under `{REPORTS}/{id}/submissions`.
    pub const REPORTS: &str = "/api/reports";
    /// Current session user.
    pub const CURRENT_USER: &str = "/api/auth/me";
}

/// Client-side router paths.
pub mod local_routes {
    pub const HOME: &str = "/";
    pub const REPORTS: &str = "/reports";
}

/// Permission tags checked against `User::roles`.
pub mod app_permissions {
    pub const ROLE_REPORT_VIEW_SUBMISSIONS: &str = "roleReportViewSubmissions";
}

/// Rows per page used when a table does not request a specific size.
pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// Page sizes offered by the table pagination footer.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Viewport width (CSS px) at and above which tables render in desktop layout.
pub const DESKTOP_BREAKPOINT_PX: f64 = 960.0;

/// Row limit sent with the first submissions search.
pub const DEFAULT_SUBMISSIONS_LIMIT: u64 = 5000;

/// Limits offered by the submissions list header.
pub const SUBMISSIONS_LIMIT_OPTIONS: [u64; 4] = [100, 500, 1000, 5000];

/// How long a toast stays on screen before it is dismissed.
pub const TOAST_DISMISS_MS: u32 = 4000;

/// Percent-encode `id` so it stays a single path segment.
pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Client route for the submit form of a report.
pub fn report_submit_path(report_id: &str) -> String {
    format!("{}/{}/submit", local_routes::REPORTS, encode_segment(report_id))
}

/// Client route for the submissions table of a report.
pub fn report_submissions_path(report_id: &str) -> String {
    format!("{}/{}/submissions", local_routes::REPORTS, encode_segment(report_id))
}

/// Backend resource for a report's submissions search.
pub fn report_submissions_resource(report_id: &str) -> String {
    format!("{}/{}/submissions", remote_routes::REPORTS, encode_segment(report_id))
}
