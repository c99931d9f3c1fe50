//! Landing page linking into the reports module.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::local_routes;
use crate::state::auth::AuthState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.with(|a| match &a.user {
            Some(user) if !user.name.is_empty() => format!("Welcome, {}", user.name),
            _ => "Welcome".to_owned(),
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Dashboard"</h1>
                <span class="dashboard-page__greeting">{greeting}</span>
            </header>
            <nav class="dashboard-page__links">
                <A href=local_routes::REPORTS attr:class="dashboard-page__link">
                    "Reports"
                </A>
            </nav>
        </div>
    }
}
