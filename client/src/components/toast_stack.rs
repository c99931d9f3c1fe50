//! Toast notifications: the fire-and-forget error surface for fetch failures.

use leptos::prelude::*;

use crate::state::toast::ToastState;

/// Queue an error toast that dismisses itself after `TOAST_DISMISS_MS`.
pub fn notify_error(toasts: RwSignal<ToastState>, message: &str) {
    let Some(id) = toasts.try_update(|t| t.error(message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::config::TOAST_DISMISS_MS, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Fixed-position stack of active toasts.
#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-stack" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast {}", toast.level.css_modifier()) role="alert">
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    on:click=move |_| toasts.update(|t| t.dismiss(id))
                                    title="Dismiss"
                                    aria-label="Dismiss"
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
