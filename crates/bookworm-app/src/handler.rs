//! Update function - handles state transitions (TEA pattern)

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Actions the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Hand the query to the presenter
    Search(String),
}

/// Process a message and update state. Returns an optional follow-up action
/// for the event loop.
pub fn update(state: &mut AppState, message: Message) -> Option<UpdateAction> {
    match message {
        Message::Quit => {
            state.request_quit();
            None
        }

        Message::Tick => {
            state.tick();
            None
        }

        Message::Key(key) => handle_key(state, key),
    }
}

/// Key handling for the single search screen.
///
/// Enter always submits the current buffer, with no validation or
/// debouncing; a search issued while another is in flight is allowed.
fn handle_key(state: &mut AppState, key: InputKey) -> Option<UpdateAction> {
    match key {
        InputKey::Enter => return Some(UpdateAction::Search(state.query().to_string())),

        InputKey::CharCtrl('c') | InputKey::Esc => state.request_quit(),

        InputKey::Char(c) => state.insert_char(c),
        InputKey::Backspace => state.backspace(),
        InputKey::Delete => state.delete(),
        InputKey::Left => state.move_left(),
        InputKey::Right => state.move_right(),
        InputKey::Home => state.move_home(),
        InputKey::End => state.move_end(),

        InputKey::Up => state.select_prev(),
        InputKey::Down => state.select_next(),

        InputKey::CharCtrl(_) => {}
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use bookworm_core::ViewState;

    fn type_query(state: &mut AppState, text: &str) {
        for c in text.chars() {
            update(state, Message::Key(InputKey::Char(c)));
        }
    }

    #[test]
    fn enter_submits_current_buffer() {
        let mut state = AppState::new();
        type_query(&mut state, "dog");

        let action = update(&mut state, Message::Key(InputKey::Enter));
        assert_eq!(action, Some(UpdateAction::Search("dog".into())));
    }

    #[test]
    fn enter_submits_empty_buffer_too() {
        let mut state = AppState::new();
        let action = update(&mut state, Message::Key(InputKey::Enter));
        assert_eq!(action, Some(UpdateAction::Search(String::new())));
    }

    #[test]
    fn enter_resubmits_while_loading() {
        let mut state = AppState::new();
        type_query(&mut state, "a");
        state.apply_view(ViewState::Loading);

        // No debounce: a second submit is allowed while one is in flight.
        let action = update(&mut state, Message::Key(InputKey::Enter));
        assert_eq!(action, Some(UpdateAction::Search("a".into())));
    }

    #[test]
    fn ctrl_c_and_esc_request_quit() {
        let mut state = AppState::new();
        update(&mut state, Message::Key(InputKey::CharCtrl('c')));
        assert!(state.should_quit());

        let mut state = AppState::new();
        update(&mut state, Message::Key(InputKey::Esc));
        assert!(state.should_quit());
    }

    #[test]
    fn quit_message_sets_flag() {
        let mut state = AppState::new();
        update(&mut state, Message::Quit);
        assert!(state.should_quit());
    }

    #[test]
    fn typing_edits_the_buffer() {
        let mut state = AppState::new();
        type_query(&mut state, "cat");
        update(&mut state, Message::Key(InputKey::Backspace));
        assert_eq!(state.query(), "ca");
        assert!(update(&mut state, Message::Tick).is_none());
    }

    #[test]
    fn arrows_move_list_selection() {
        let mut state = AppState::new();
        state.apply_view(ViewState::Content(vec![
            bookworm_core::ResultSummary {
                title: "a".into(),
                snippet: String::new(),
            },
            bookworm_core::ResultSummary {
                title: "b".into(),
                snippet: String::new(),
            },
        ]));

        update(&mut state, Message::Key(InputKey::Down));
        assert_eq!(state.selected, 1);
        update(&mut state, Message::Key(InputKey::Up));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn other_ctrl_chords_are_ignored() {
        let mut state = AppState::new();
        let action = update(&mut state, Message::Key(InputKey::CharCtrl('x')));
        assert!(action.is_none());
        assert!(!state.should_quit());
    }
}
