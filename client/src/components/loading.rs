//! Placeholder shown while a view waits for its data.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading" role="progressbar" aria-busy="true">
            <span class="loading__spinner" aria-hidden="true"></span>
            <span class="loading__label">"Loading..."</span>
        </div>
    }
}
