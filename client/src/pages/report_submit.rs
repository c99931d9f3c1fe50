//! Read-only preview of the fields a report submission asks for.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::breadcrumbs::{Breadcrumbs, Crumb};
use crate::components::loading::Loading;
use crate::config::local_routes;
use crate::net::types::Report;
use crate::pages::report_route::{REPORT_NOT_FOUND_NOTICE, RouteReport, use_route_report};

/// Route view for `/reports/:id/submit`.
#[component]
pub fn ReportSubmitPage() -> impl IntoView {
    let route_report = use_route_report();

    view! {
        <div class="report-submit-page">
            <Breadcrumbs
                title="Submit Report"
                paths=vec![Crumb::new(local_routes::HOME, "Dashboard"), Crumb::new(local_routes::REPORTS, "Reports")]
            />
            {move || match route_report.get() {
                RouteReport::Loading => view! { <Loading/> }.into_any(),
                RouteReport::Found(report) => view! { <ReportFields report=report/> }.into_any(),
                RouteReport::Missing => {
                    view! {
                        <div class="alert alert--info" role="status">
                            {REPORT_NOT_FOUND_NOTICE}
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
fn ReportFields(report: Report) -> impl IntoView {
    let empty = report.fields.is_empty();
    let fields = report
        .fields
        .iter()
        .map(|field| {
            let kind = field.kind.clone().unwrap_or_else(|| "text".to_owned());
            view! {
                <li class="report-fields__item">
                    <span class="report-fields__label">{field.display_label().to_owned()}</span>
                    <span class="report-fields__kind">{kind}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="report-fields">
            <h2 class="report-fields__title">{report.name}</h2>
            {empty.then(|| view! { <p class="report-fields__empty">"This report has no fields to submit."</p> })}
            <ul class="report-fields__list">{fields}</ul>
            <A href=local_routes::REPORTS attr:class="btn">
                "Back to Report List"
            </A>
        </section>
    }
}
