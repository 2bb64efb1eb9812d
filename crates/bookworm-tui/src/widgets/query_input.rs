//! Query input widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::theme;

/// Single-line search input with a cursor marker
pub struct QueryInput<'a> {
    query: &'a str,
    /// Cursor position in characters
    cursor: usize,
}

impl<'a> QueryInput<'a> {
    pub fn new(query: &'a str, cursor: usize) -> Self {
        Self { query, cursor }
    }
}

impl Widget for QueryInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_ACTIVE));

        // Split the query at the cursor so the cursor cell can be styled
        let split = self
            .query
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.query.len());
        let (before, after) = self.query.split_at(split);

        let mut spans = vec![Span::styled(
            before.to_string(),
            Style::default().fg(theme::TEXT_PRIMARY),
        )];

        if let Some(c) = after.chars().next() {
            // Cursor over an existing character
            spans.push(Span::styled(
                c.to_string(),
                Style::default()
                    .fg(theme::DEEPEST_BG)
                    .bg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                after[c.len_utf8()..].to_string(),
                Style::default().fg(theme::TEXT_PRIMARY),
            ));
        } else {
            // Cursor at end of buffer
            spans.push(Span::styled(
                "_",
                Style::default().fg(theme::ACCENT),
            ));
        }

        Paragraph::new(Line::from(spans)).block(block).render(area, buf);
    }
}
