//! Results list widget

use bookworm_core::ResultSummary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget},
};

use crate::{markup, theme};

/// Stateful list of search results: one title line plus one snippet line
/// per match, with the snippet's markup rendered as styled text.
pub struct ResultsList<'a> {
    items: &'a [ResultSummary],
}

impl<'a> ResultsList<'a> {
    pub fn new(items: &'a [ResultSummary]) -> Self {
        Self { items }
    }
}

impl StatefulWidget for ResultsList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut ListState) {
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| {
                let title = Line::from(Span::styled(
                    item.title.clone(),
                    Style::default()
                        .fg(theme::RESULT_TITLE)
                        .add_modifier(Modifier::BOLD),
                ));
                let snippet = markup::snippet_line(&item.snippet);
                ListItem::new(Text::from(vec![title, snippet]))
            })
            .collect();

        let title = format!(" Results ({}) ", self.items.len());
        let list = List::new(rows)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BORDER_DIM)),
            )
            .highlight_style(Style::default().bg(theme::SELECTION_BG));

        StatefulWidget::render(list, area, buf, state);
    }
}
