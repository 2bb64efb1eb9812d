//! Search presenter: the observable Loading -> Content | Error state machine
//!
//! One owner (the presenter) publishes into a single-slot broadcast channel
//! with last-value replay (`tokio::sync::watch`); any number of observers
//! subscribe and unsubscribe around their own lifetime.

use std::sync::Arc;

use bookworm_core::prelude::*;
use bookworm_core::ViewState;
use tokio::sync::watch;

use crate::repository::SearchBackend;

/// Holds the current [`ViewState`] and drives transitions for the single
/// `search` operation.
///
/// `search` is fire-and-forget: it publishes `Loading` synchronously, runs
/// the backend call on the runtime, and publishes the terminal state when
/// the call completes. Issuing a new search does not cancel a prior
/// in-flight one; a superseded request still publishes its outcome, so the
/// last request to *complete* determines the visible terminal state.
pub struct SearchPresenter<B> {
    backend: Arc<B>,
    states: watch::Sender<ViewState>,
}

impl<B> SearchPresenter<B>
where
    B: SearchBackend + Sync + 'static,
{
    /// Create a presenter in the `Initial` state.
    pub fn new(backend: B) -> Self {
        let (states, _) = watch::channel(ViewState::Initial);
        Self {
            backend: Arc::new(backend),
            states,
        }
    }

    /// Observe the state stream. The receiver replays the current state
    /// immediately and sees every subsequent transition.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.states.subscribe()
    }

    /// Issue a search for `query`.
    ///
    /// Publishes `Loading` before returning, then resolves to `Content` or
    /// `Error` on the runtime. Never blocks the caller and never surfaces a
    /// failure as anything other than state.
    pub fn search(&self, query: &str) {
        self.states.send_replace(ViewState::Loading);

        let backend = Arc::clone(&self.backend);
        let states = self.states.clone();
        let query = query.to_string();

        tokio::spawn(async move {
            let next = match backend.search(&query).await {
                Ok(items) => ViewState::Content(items),
                Err(err) => {
                    warn!(query, %err, "search failed");
                    ViewState::Error(err.to_string())
                }
            };
            // send_replace publishes even when no observer is currently
            // subscribed, matching the un-cancelled stale-request behavior.
            states.send_replace(next);
        });
    }
}
