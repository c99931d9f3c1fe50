//! Resolve the `:id` route segment to a report from the report collection.
//!
//! The backend only exposes the collection, so pages under
//! `/reports/:id/...` fetch it and pick their report out of it.

#[cfg(test)]
#[path = "report_route_test.rs"]
mod report_route_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::config::encode_segment;
use crate::net::types::Report;
use crate::state::fetch::{FetchCycle, FetchState};
use crate::state::toast::ToastState;

/// Notice shown when the route id matches no report.
pub const REPORT_NOT_FOUND_NOTICE: &str = "Report not found.";

#[derive(Clone, Debug, PartialEq)]
pub enum RouteReport {
    Loading,
    Found(Report),
    Missing,
}

/// Match `id` as decoded by the router or as the encoded path segment.
pub fn find_report<'a>(reports: &'a [Report], id: &str) -> Option<&'a Report> {
    reports.iter().find(|r| r.id == id || encode_segment(&r.id) == id)
}

/// A failed collection fetch resolves to `Missing`; the failure itself has
/// already been reported as a toast.
pub fn resolve_report(state: &FetchState<Vec<Report>>, id: Option<&str>) -> RouteReport {
    match state {
        FetchState::Loading => RouteReport::Loading,
        FetchState::Failed(_) => RouteReport::Missing,
        FetchState::Ready(reports) => id
            .and_then(|id| find_report(reports, id))
            .cloned()
            .map_or(RouteReport::Missing, RouteReport::Found),
    }
}

/// Fetch the report collection once and track the report named by `:id`.
pub fn use_route_report() -> Memo<RouteReport> {
    let params = use_params_map();
    let reports = RwSignal::new(FetchCycle::<Vec<Report>>::default());
    let toasts = expect_context::<RwSignal<ToastState>>();

    #[cfg(feature = "hydrate")]
    crate::state::fetch::spawn_fetch(reports, crate::net::api::fetch_reports(), move |message| {
        leptos::logging::warn!("Failed to fetch reports: {message}");
        crate::components::toast_stack::notify_error(toasts, "Failed to fetch reports");
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    Memo::new(move |_| {
        let id = params.with(|p| p.get("id"));
        reports.with(|c| resolve_report(c.state(), id.as_deref()))
    })
}
