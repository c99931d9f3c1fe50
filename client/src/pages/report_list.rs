//! Report list page: every report with its permitted actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! One fetch of the report collection on mount. "Submit Report" appears for
//! reports that have fields; the view-submissions icon appears only for
//! users holding `roleReportViewSubmissions`.

#[cfg(test)]
#[path = "report_list_test.rs"]
mod report_list_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::components::loading::Loading;
use crate::config::{app_permissions, local_routes, report_submissions_path, report_submit_path};
use crate::net::types::{Report, User};
use crate::state::auth::AuthState;
use crate::state::fetch::FetchCycle;
use crate::state::toast::ToastState;
use crate::util::roles::has_any_role;

pub const NO_REPORTS_NOTICE: &str = "Sorry, No Reports Found!";

/// Which actions a report row offers to the current user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportActions {
    pub submit: bool,
    pub view_submissions: bool,
}

pub fn report_actions(report: &Report, user: Option<&User>) -> ReportActions {
    ReportActions {
        submit: report.is_submittable(),
        view_submissions: has_any_role(user, &[app_permissions::ROLE_REPORT_VIEW_SUBMISSIONS]),
    }
}

/// Reports to list: the latest successful collection, empty if none landed.
pub fn visible_reports(cycle: &FetchCycle<Vec<Report>>) -> &[Report] {
    cycle.data().map(Vec::as_slice).unwrap_or_default()
}

/// The "no reports" notice shows once loading ends with nothing to list.
pub fn shows_empty_notice(cycle: &FetchCycle<Vec<Report>>) -> bool {
    !cycle.is_loading() && visible_reports(cycle).is_empty()
}

#[component]
pub fn ReportListPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let reports = RwSignal::new(FetchCycle::<Vec<Report>>::default());

    #[cfg(feature = "hydrate")]
    crate::state::fetch::spawn_fetch(reports, crate::net::api::fetch_reports(), move |message| {
        leptos::logging::warn!("Failed to fetch reports: {message}");
        crate::components::toast_stack::notify_error(toasts, "Failed to fetch reports");
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = toasts;

    let items = move || {
        let user = auth.with(|a| a.user.clone());
        reports
            .with(|c| visible_reports(c).to_vec())
            .into_iter()
            .map(|report| {
                let actions = report_actions(&report, user.as_ref());
                view! { <ReportListItem report=report actions=actions/> }
            })
            .collect_view()
    };

    view! {
        <Show when=move || !reports.with(FetchCycle::is_loading) fallback=|| view! { <Loading/> }>
            <div class="report-list-page">
                <h1 class="report-list-page__title">"Report List"</h1>
                <div class="report-list-page__crumbs">
                    <Breadcrumbs title="Reports" paths=vec![Crumb::new(local_routes::HOME, "Dashboard")]/>
                </div>
                <div class="report-list">
                    <Show when=move || reports.with(shows_empty_notice)>
                        <div class="alert alert--info" role="status">
                            {NO_REPORTS_NOTICE}
                        </div>
                    </Show>
                    <ul class="report-list__items">{items}</ul>
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ReportListItem(report: Report, actions: ReportActions) -> impl IntoView {
    let navigate = use_navigate();
    let submit_path = report_submit_path(&report.id);
    let submissions_path = report_submissions_path(&report.id);

    let submit_button = actions.submit.then(|| {
        let navigate = navigate.clone();
        view! {
            <button class="btn btn--outlined" on:click=move |_| navigate(&submit_path, NavigateOptions::default())>
                "Submit Report"
            </button>
        }
    });
    let submissions_button = actions.view_submissions.then(|| {
        view! {
            <button
                class="icon-btn report-list__view"
                on:click=move |_| navigate(&submissions_path, NavigateOptions::default())
                title="View submissions"
                aria-label="View submissions"
            >
                <svg viewBox="0 0 24 24" aria-hidden="true">
                    <path d="M12 4.5C7 4.5 2.73 7.61 1 12c1.73 4.39 6 7.5 11 7.5s9.27-3.11 11-7.5c-1.73-4.39-6-7.5-11-7.5zM12 17c-2.76 0-5-2.24-5-5s2.24-5 5-5 5 2.24 5 5-2.24 5-5 5zm0-8c-1.66 0-3 1.34-3 3s1.34 3 3 3 3-1.34 3-3-1.34-3-3-3z"></path>
                </svg>
            </button>
        }
    });

    view! {
        <li class="report-list__item">
            <span class="report-list__name">{report.name}</span>
            <div class="report-list__actions">{submit_button}{submissions_button}</div>
        </li>
    }
}
