//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Style, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    dashboard::DashboardPage, report_list::ReportListPage, report_submissions::ReportSubmissionsPage,
    report_submit::ReportSubmitPage,
};
use crate::state::{auth::AuthState, toast::ToastState};
use crate::theme::palette;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and toast contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let toasts = RwSignal::new(ToastState::default());
    provide_context(auth);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        if user.is_none() {
            leptos::logging::log!("no current user; permission-gated actions hidden");
        }
        auth.update(|a| a.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/reports.css"/>
        <Style>{palette::css_variables()}</Style>
        <Title text="Reports"/>

        <Router>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("reports") view=ReportListPage/>
                    <Route
                        path=(StaticSegment("reports"), ParamSegment("id"), StaticSegment("submissions"))
                        view=ReportSubmissionsPage
                    />
                    <Route
                        path=(StaticSegment("reports"), ParamSegment("id"), StaticSegment("submit"))
                        view=ReportSubmitPage
                    />
                </Routes>
            </main>
        </Router>
        <ToastStack/>
    }
}
