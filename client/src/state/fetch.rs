//! Fetch-cycle state: an explicit `Loading | Ready | Failed` union plus a
//! generation counter that drops stale responses.
//!
//! DESIGN
//! ======
//! A cycle starts with [`FetchCycle::begin`], which moves to `Loading` and
//! hands out a ticket. [`FetchCycle::complete`] applies the result and leaves
//! `Loading` in one step, so "not loading" is never observable before the
//! result is. A ticket from an older cycle is ignored: when a filter changes
//! while a request is in flight, only the newest response lands.
//!
//! The last successful payload survives later cycles until a newer success
//! replaces it, so a failed reload keeps showing what the view already had.

#[cfg(test)]
#[path = "fetch_test.rs"]
mod fetch_test;

use std::fmt::Display;

/// What a view knows about its remote data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum FetchState<T> {
    /// A request is outstanding; render a placeholder, not data.
    #[default]
    Loading,
    /// The last request succeeded (possibly with an empty collection).
    Ready(T),
    /// The last request failed; the message was already surfaced to the user.
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Self::Ready(data),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}

/// Identifies one fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Outcome of [`FetchCycle::complete`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Completion {
    /// The result was applied and the view left `Loading`.
    Applied,
    /// A newer cycle started since this ticket was issued, or this cycle
    /// already completed; result dropped.
    Stale,
}

/// Generation-guarded fetch state for one view.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchCycle<T> {
    state: FetchState<T>,
    /// Payload of the most recent success while a later cycle is loading or
    /// has failed.
    last_ready: Option<T>,
    generation: u64,
}

impl<T> FetchCycle<T> {
    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    /// Data to render: the current result, or the last successful one when
    /// the current cycle is loading or failed. `None` until a success lands.
    pub fn data(&self) -> Option<&T> {
        self.state.data().or(self.last_ready.as_ref())
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Start a new cycle, invalidating any ticket handed out before.
    pub fn begin(&mut self) -> FetchTicket {
        self.generation += 1;
        if let FetchState::Ready(data) = std::mem::replace(&mut self.state, FetchState::Loading) {
            self.last_ready = Some(data);
        }
        FetchTicket(self.generation)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.generation
    }

    /// Apply `result` if `ticket` belongs to the newest cycle and that cycle
    /// has not completed yet.
    pub fn complete<E: Display>(&mut self, ticket: FetchTicket, result: Result<T, E>) -> Completion {
        if !self.is_current(ticket) || !self.state.is_loading() {
            return Completion::Stale;
        }
        self.state = FetchState::from_result(result);
        if matches!(self.state, FetchState::Ready(_)) {
            self.last_ready = None;
        }
        Completion::Applied
    }
}

/// Run `request` as one fetch cycle of `cycle`.
///
/// `on_failure` runs after the failure has been applied, and only if the
/// cycle was still current. If the owning view was disposed in the meantime
/// the response is dropped without touching any state.
#[cfg(feature = "hydrate")]
pub fn spawn_fetch<T, Fut, F>(cycle: leptos::prelude::RwSignal<FetchCycle<T>>, request: Fut, on_failure: F)
where
    T: Send + Sync + 'static,
    Fut: std::future::Future<Output = Result<T, crate::net::error::ApiError>> + 'static,
    F: FnOnce(String) + 'static,
{
    use leptos::prelude::Update;

    let Some(ticket) = cycle.try_update(FetchCycle::begin) else {
        return;
    };
    leptos::task::spawn_local(async move {
        let result = request.await;
        let failure = result.as_ref().err().map(ToString::to_string);
        match cycle.try_update(|c| c.complete(ticket, result)) {
            Some(Completion::Applied) => {
                if let Some(message) = failure {
                    on_failure(message);
                }
            }
            Some(Completion::Stale) => leptos::logging::log!("dropping stale fetch response"),
            None => leptos::logging::log!("dropping fetch response for disposed view"),
        }
    });
}
