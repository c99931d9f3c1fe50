//! Breadcrumb trail rendered above page content.

use leptos::prelude::*;
use leptos_router::components::A;

/// One ancestor link in the trail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub path: String,
    pub label: String,
}

impl Crumb {
    pub fn new(path: impl Into<String>, label: impl Into<String>) -> Self {
        Self { path: path.into(), label: label.into() }
    }
}

/// Ancestor links followed by the current page `title` (not a link).
#[component]
pub fn Breadcrumbs(#[prop(into)] title: String, #[prop(default = Vec::new())] paths: Vec<Crumb>) -> impl IntoView {
    view! {
        <nav class="breadcrumbs" aria-label="breadcrumb">
            {paths
                .into_iter()
                .map(|crumb| {
                    view! {
                        <A href=crumb.path attr:class="breadcrumbs__link">
                            {crumb.label}
                        </A>
                        <span class="breadcrumbs__sep" aria-hidden="true">"/"</span>
                    }
                })
                .collect_view()}
            <span class="breadcrumbs__current" aria-current="page">{title}</span>
        </nav>
    }
}
