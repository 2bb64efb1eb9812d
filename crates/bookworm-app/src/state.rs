//! Application state (Model in TEA pattern)

use bookworm_core::{ResultSummary, ViewState};

/// Single-screen application state: the query being edited, the latest
/// published [`ViewState`], and view-local concerns (list selection,
/// spinner animation, quit flag).
///
/// The UI loop is the only writer; the presenter never touches this.
#[derive(Debug, Default)]
pub struct AppState {
    /// Text in the query input field
    query: String,
    /// Cursor position as a byte offset into `query` (always on a char
    /// boundary)
    cursor: usize,

    /// Latest state published by the presenter
    pub view: ViewState,

    /// Selected row in the results list
    pub selected: usize,

    /// Animation frame counter, advanced on ticks while loading
    pub spinner_frame: usize,

    should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ─────────────────────────────────────────────────────────
    // Query input editing
    // ─────────────────────────────────────────────────────────

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Cursor position in characters (for rendering)
    pub fn cursor_chars(&self) -> usize {
        self.query[..self.cursor].chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        self.query.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.query.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.query.len() {
            self.query.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.query[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.query.len();
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.query[..self.cursor].char_indices().last().map(|(i, _)| i)
    }

    // ─────────────────────────────────────────────────────────
    // Presentation state
    // ─────────────────────────────────────────────────────────

    /// Apply a state published by the presenter. New content resets the
    /// list selection.
    pub fn apply_view(&mut self, view: ViewState) {
        if matches!(view, ViewState::Content(_)) {
            self.selected = 0;
        }
        self.view = view;
    }

    /// Items to list, when the last search succeeded
    pub fn results(&self) -> Option<&[ResultSummary]> {
        match &self.view {
            ViewState::Content(items) => Some(items),
            _ => None,
        }
    }

    pub fn select_next(&mut self) {
        if let Some(items) = self.results() {
            if self.selected + 1 < items.len() {
                self.selected += 1;
            }
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Advance the loading animation. No-op outside of `Loading`.
    pub fn tick(&mut self) {
        if self.view == ViewState::Loading {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(title: &str) -> ResultSummary {
        ResultSummary {
            title: title.into(),
            snippet: String::new(),
        }
    }

    #[test]
    fn inserts_at_cursor() {
        let mut state = AppState::new();
        state.insert_char('d');
        state.insert_char('g');
        state.move_left();
        state.insert_char('o');
        assert_eq!(state.query(), "dog");
        assert_eq!(state.cursor_chars(), 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut state = AppState::new();
        for c in "dogs".chars() {
            state.insert_char(c);
        }
        state.backspace();
        assert_eq!(state.query(), "dog");

        state.move_home();
        state.backspace(); // no-op at start
        assert_eq!(state.query(), "dog");
    }

    #[test]
    fn delete_removes_at_cursor() {
        let mut state = AppState::new();
        for c in "dog".chars() {
            state.insert_char(c);
        }
        state.move_home();
        state.delete();
        assert_eq!(state.query(), "og");

        state.move_end();
        state.delete(); // no-op at end
        assert_eq!(state.query(), "og");
    }

    #[test]
    fn editing_handles_multibyte_chars() {
        let mut state = AppState::new();
        state.insert_char('é');
        state.insert_char('б');
        assert_eq!(state.cursor_chars(), 2);
        state.move_left();
        state.backspace();
        assert_eq!(state.query(), "б");
    }

    #[test]
    fn new_content_resets_selection() {
        let mut state = AppState::new();
        state.apply_view(ViewState::Content(vec![
            summary("a"),
            summary("b"),
            summary("c"),
        ]));
        state.select_next();
        state.select_next();
        assert_eq!(state.selected, 2);

        state.apply_view(ViewState::Content(vec![summary("x")]));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn selection_is_bounded() {
        let mut state = AppState::new();
        state.apply_view(ViewState::Content(vec![summary("a"), summary("b")]));
        state.select_prev(); // no-op at top
        assert_eq!(state.selected, 0);
        state.select_next();
        state.select_next(); // clamped at last row
        assert_eq!(state.selected, 1);
    }

    #[test]
    fn tick_animates_only_while_loading() {
        let mut state = AppState::new();
        state.tick();
        assert_eq!(state.spinner_frame, 0);

        state.apply_view(ViewState::Loading);
        state.tick();
        state.tick();
        assert_eq!(state.spinner_frame, 2);
    }
}
