//! Main TUI runner - entry point and event loop

use bookworm_app::{update, AppState, SearchBackend, SearchPresenter, UpdateAction};
use bookworm_core::prelude::*;
use bookworm_core::ViewState;
use tokio::sync::watch;

use crate::{event, render, terminal};

/// Run the TUI against a presenter.
///
/// Subscribes to the presenter's state stream for the screen's lifetime and
/// restores the terminal on the way out; the subscription ends when the
/// receiver is dropped here.
pub async fn run<B>(presenter: SearchPresenter<B>) -> Result<()>
where
    B: SearchBackend + Sync + 'static,
{
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let states = presenter.subscribe();
    let mut state = AppState::new();

    let result = run_loop(&mut term, &mut state, &presenter, states);

    ratatui::restore();
    result
}

/// Main event loop
///
/// Single logical UI context: this loop is the only writer of `AppState`
/// and the only reader of the state stream. Presenter results published on
/// the runtime land here on the next turn, so observers never see
/// concurrent writes.
fn run_loop<B>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    presenter: &SearchPresenter<B>,
    mut states: watch::Receiver<ViewState>,
) -> Result<()>
where
    B: SearchBackend + Sync + 'static,
{
    while !state.should_quit() {
        // Apply any state published by the presenter since the last turn
        if states.has_changed().unwrap_or(false) {
            let view = states.borrow_and_update().clone();
            state.apply_view(view);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            if let Some(action) = update(state, message) {
                match action {
                    UpdateAction::Search(query) => {
                        info!(query = %query, "search submitted");
                        presenter.search(&query);
                    }
                }
            }
        }
    }

    Ok(())
}
