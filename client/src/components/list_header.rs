//! Header bar for list views: title, busy indicator, and row-limit control.
//!
//! Changing the limit (or pressing reload) writes the filter signal, which
//! the owning view watches to start a new fetch cycle.

#[cfg(test)]
#[path = "list_header_test.rs"]
mod list_header_test;

use leptos::prelude::*;

use crate::config::SUBMISSIONS_LIMIT_OPTIONS;
use crate::net::types::Filter;

/// Current `limit` of a filter, if it is a non-negative integer.
pub fn filter_limit(filter: &Filter) -> Option<u64> {
    filter.get("limit").and_then(serde_json::Value::as_u64)
}

/// Copy of `filter` with `limit` replaced; other parameters are kept.
pub fn with_limit(filter: &Filter, limit: u64) -> Filter {
    let mut next = filter.clone();
    next.insert("limit".to_owned(), serde_json::Value::from(limit));
    next
}

#[component]
pub fn ListHeader(
    #[prop(into)] title: String,
    #[prop(into)] loading: Signal<bool>,
    filter: RwSignal<Filter>,
) -> impl IntoView {
    let current_limit = move || filter.with(filter_limit);

    view! {
        <div class="list-header">
            <h2 class="list-header__title">{title}</h2>
            <Show when=move || loading.get()>
                <span class="list-header__busy" aria-live="polite">"Loading..."</span>
            </Show>
            <span class="list-header__spacer"></span>
            <label class="list-header__limit">
                "Show "
                <select on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<u64>() {
                        filter.update(|f| *f = with_limit(f, limit));
                    }
                }>
                    {SUBMISSIONS_LIMIT_OPTIONS
                        .into_iter()
                        .map(|limit| {
                            view! {
                                <option value=limit.to_string() selected=move || current_limit() == Some(limit)>
                                    {limit.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </label>
            <button
                class="btn list-header__reload"
                disabled=move || loading.get()
                on:click=move |_| filter.update(|_| {})
                title="Reload"
            >
                "Reload"
            </button>
        </div>
    }
}
