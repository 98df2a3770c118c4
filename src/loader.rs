//! Page Data Loading
//!
//! View-state machine and fetch driver shared by every page.

use std::future::Future;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::RequestError;

/// What a page knows about its data
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> PageState<T> {
    /// Collapse a fetch result into view state. The error detail is dropped
    /// here; the fetch driver logs it to the console before settling.
    pub fn settle(result: Result<T, RequestError>, error_text: &str) -> Self {
        match result {
            Ok(data) => PageState::Loaded(data),
            Err(_) => PageState::Failed(error_text.to_string()),
        }
    }
}

struct GateShared {
    alive: AtomicBool,
    generation: AtomicU32,
}

/// Guards one page's fetches. Every request gets a generation-numbered
/// ticket; only the ticket from the most recent request may update state,
/// and none at all once the page has been torn down.
#[derive(Clone)]
pub struct FetchGate {
    shared: Arc<GateShared>,
}

impl FetchGate {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(GateShared {
                alive: AtomicBool::new(true),
                generation: AtomicU32::new(0),
            }),
        }
    }

    /// Start a new request generation, invalidating all earlier tickets
    pub fn issue(&self) -> FetchTicket {
        let issued = self.shared.generation.fetch_add(1, Ordering::Relaxed) + 1;
        FetchTicket {
            shared: Arc::clone(&self.shared),
            issued,
        }
    }

    /// Register in `on_cleanup`; afterwards no ticket is admitted
    pub fn retire(&self) {
        self.shared.alive.store(false, Ordering::Relaxed);
    }

    /// Drive one fetch: enter Loading (clearing any previous error), run the
    /// future, and apply the outcome only if this request is still current.
    pub fn run<T, Fut>(
        &self,
        set_state: WriteSignal<PageState<T>>,
        error_text: &'static str,
        fut: Fut,
    ) where
        T: Send + Sync + 'static,
        Fut: Future<Output = Result<T, RequestError>> + 'static,
    {
        set_state.set(PageState::Loading);
        let ticket = self.issue();
        spawn_local(async move {
            let result = fut.await;
            if !ticket.admits() {
                web_sys::console::debug_1(
                    &format!("dropping superseded response ({error_text})").into(),
                );
                return;
            }
            if let Err(err) = &result {
                web_sys::console::error_1(&format!("{error_text}: {err}").into());
            }
            set_state.set(PageState::settle(result, error_text));
        });
    }
}

/// One outstanding request's claim on the page state
pub struct FetchTicket {
    shared: Arc<GateShared>,
    issued: u32,
}

impl FetchTicket {
    /// True only while the gate is alive and no newer ticket exists
    pub fn admits(&self) -> bool {
        self.shared.alive.load(Ordering::Relaxed)
            && self.shared.generation.load(Ordering::Relaxed) == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn settle_keeps_data_on_success() {
        let state = PageState::settle(Ok(vec![1, 2, 3]), "Cannot load");
        assert_eq!(state, PageState::Loaded(vec![1, 2, 3]));
    }

    #[test]
    fn settle_replaces_error_detail_with_fixed_text() {
        let result: Result<Vec<i32>, RequestError> =
            Err(RequestError::Status(StatusCode::INTERNAL_SERVER_ERROR));
        let state = PageState::settle(result, "Cannot load opportunity list");
        match state {
            PageState::Failed(message) => {
                assert_eq!(message, "Cannot load opportunity list");
                assert!(!message.contains("500"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn empty_success_is_loaded_not_failed() {
        let state = PageState::settle(Ok(Vec::<i32>::new()), "Cannot load");
        assert_eq!(state, PageState::Loaded(Vec::new()));
    }

    #[test]
    fn latest_ticket_admits() {
        let gate = FetchGate::new();
        let ticket = gate.issue();
        assert!(ticket.admits());
    }

    #[test]
    fn superseded_ticket_is_rejected() {
        let gate = FetchGate::new();
        let stale = gate.issue();
        let current = gate.issue();
        assert!(!stale.admits());
        assert!(current.admits());
    }

    #[test]
    fn retired_gate_admits_nothing() {
        let gate = FetchGate::new();
        let ticket = gate.issue();
        gate.retire();
        assert!(!ticket.admits());
    }

    #[test]
    fn reissue_after_retire_stays_closed() {
        let gate = FetchGate::new();
        gate.retire();
        let ticket = gate.issue();
        assert!(!ticket.admits());
    }
}
