//! Viewport width tracking for the responsive table layout.
//!
//! SSR and the first hydrate pass assume the desktop layout; the browser
//! then measures the window and follows `resize` events.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use leptos::prelude::*;

use crate::config::DESKTOP_BREAKPOINT_PX;
use crate::table::prepare::Layout;

/// Table layout for a viewport `width` in CSS pixels.
pub fn layout_for_width(width: f64) -> Layout {
    if width >= DESKTOP_BREAKPOINT_PX { Layout::Table } else { Layout::List }
}

/// Reactive layout that follows the browser window width.
pub fn use_layout() -> Signal<Layout> {
    let layout = RwSignal::new(Layout::Table);

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            if let Some(width) = window_width() {
                layout.set(layout_for_width(width));
            }
        };
        Effect::new(move || measure());
        let handle = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || handle.remove());
    }

    layout.into()
}

#[cfg(feature = "hydrate")]
fn window_width() -> Option<f64> {
    web_sys::window()?.inner_width().ok()?.as_f64()
}
