//! Submissions of one report, shown through the generic tabular view.
//!
//! SYSTEM CONTEXT
//! ==============
//! The search filter is a signal; every write to it (limit change, reload)
//! starts a new fetch cycle. Responses from superseded cycles are dropped by
//! `state::fetch`, so a slow early response cannot overwrite a newer one.

#[cfg(test)]
#[path = "report_submissions_test.rs"]
mod report_submissions_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::data_list::MobileRow;
use crate::components::list_header::ListHeader;
use crate::components::loading::Loading;
use crate::components::tabular_view::TabularView;
use crate::config::{DEFAULT_ROWS_PER_PAGE, DEFAULT_SUBMISSIONS_LIMIT, local_routes};
use crate::net::types::{Filter, Report, SubmissionsPage};
use crate::pages::report_route::{REPORT_NOT_FOUND_NOTICE, RouteReport, use_route_report};
use crate::state::fetch::FetchCycle;
use crate::state::toast::ToastState;
use crate::table::Row;
use crate::table::columns::{ColumnDescriptor, ColumnModel};

/// Column the submissions table sorts by before any header click.
pub const INITIAL_SORT_COLUMN: &str = "name";

/// Filter sent with the first submissions search.
pub fn initial_filter() -> Filter {
    let mut filter = Filter::new();
    filter.insert("limit".to_owned(), serde_json::Value::from(DEFAULT_SUBMISSIONS_LIMIT));
    filter
}

pub fn submissions_title(report: &Report) -> String {
    format!("{} submissions", report.name)
}

/// Card for a submission on narrow screens, titled with the report name.
pub fn submission_card(report_name: &str, columns: &[ColumnDescriptor], row: &Row) -> MobileRow {
    MobileRow::from_row(&ColumnModel::new(columns.to_vec()), row).with_primary(report_name)
}

/// Columns of the page on screen; a failed reload keeps the previous page.
fn page_columns(cycle: &FetchCycle<SubmissionsPage>) -> Vec<ColumnDescriptor> {
    cycle.data().map(|p| p.columns.clone()).unwrap_or_default()
}

fn page_rows(cycle: &FetchCycle<SubmissionsPage>) -> Vec<Row> {
    cycle.data().map(|p| p.data.clone()).unwrap_or_default()
}

#[component]
pub fn ReportSubmissions(report: Report, on_back_to_list: Callback<()>) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let filter = RwSignal::new(initial_filter());
    let submissions = RwSignal::new(FetchCycle::<SubmissionsPage>::default());

    #[cfg(feature = "hydrate")]
    {
        let report_id = report.id.clone();
        Effect::new(move || {
            let current = filter.get();
            let report_id = report_id.clone();
            crate::state::fetch::spawn_fetch(
                submissions,
                async move { crate::net::api::search_submissions(&report_id, &current).await },
                move |message| {
                    leptos::logging::warn!("Failed to fetch submissions: {message}");
                    crate::components::toast_stack::notify_error(toasts, "Failed to fetch submissions");
                },
            );
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let loading = Signal::derive(move || submissions.with(FetchCycle::is_loading));
    let columns = Signal::derive(move || submissions.with(page_columns));
    let rows = Signal::derive(move || submissions.with(page_rows));

    let title = submissions_title(&report);
    let report_name = report.name.clone();
    let to_mobile_row = Callback::new(move |row: Row| columns.with_untracked(|cols| submission_card(&report_name, cols, &row)));

    view! {
        <div class="report-submissions">
            <span class="report-submissions__title">{title}</span>
            <div class="report-submissions__back">
                <button class="btn" on:click=move |_| on_back_to_list.run(())>
                    "Back to Report List"
                </button>
            </div>
            <ListHeader title="Report Submissions" loading=loading filter=filter/>
            <TabularView
                columns=columns
                rows=rows
                loading=loading
                initial_sort_by=INITIAL_SORT_COLUMN
                initial_rows_per_page=DEFAULT_ROWS_PER_PAGE
                to_mobile_row=to_mobile_row
            />
        </div>
    }
}

/// Route wrapper for `/reports/:id/submissions`.
#[component]
pub fn ReportSubmissionsPage() -> impl IntoView {
    let route_report = use_route_report();
    let navigate = use_navigate();
    let on_back_to_list = Callback::new(move |()| navigate(local_routes::REPORTS, NavigateOptions::default()));

    view! {
        <div class="report-submissions-page">
            {move || match route_report.get() {
                RouteReport::Loading => view! { <Loading/> }.into_any(),
                RouteReport::Found(report) => {
                    view! { <ReportSubmissions report=report on_back_to_list=on_back_to_list/> }.into_any()
                }
                RouteReport::Missing => {
                    view! {
                        <div class="alert alert--info" role="status">
                            {REPORT_NOT_FOUND_NOTICE}
                        </div>
                        <button class="btn" on:click=move |_| on_back_to_list.run(())>
                            "Back to Report List"
                        </button>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
