//! Main render/view function (View in TEA pattern)

use bookworm_app::AppState;
use bookworm_core::ViewState;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, ListState, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::widgets::{QueryInput, ResultsList};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const MSG_INITIAL: &str = "Type a query and press Enter to search the book catalog.";
const MSG_NO_MATCHES: &str = "No matches.";

/// Render the complete UI
///
/// Exactly one of the four body variants is drawn: the initial placeholder,
/// the progress spinner, the results list, or the error message.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with the background color
    let bg = Block::default().style(Style::default().bg(theme::DEEPEST_BG));
    frame.render_widget(bg, area);

    let [header, input, body, footer] = areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "bookworm — book search",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center),
        header,
    );

    frame.render_widget(QueryInput::new(state.query(), state.cursor_chars()), input);

    match &state.view {
        ViewState::Initial => render_message(frame, body, MSG_INITIAL, theme::TEXT_MUTED),

        ViewState::Loading => {
            let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];
            render_message(
                frame,
                body,
                &format!("{spinner} Searching…"),
                theme::STATUS_YELLOW,
            );
        }

        ViewState::Content(items) if items.is_empty() => {
            render_message(frame, body, MSG_NO_MATCHES, theme::TEXT_SECONDARY)
        }

        ViewState::Content(items) => {
            let mut list_state = ListState::default().with_selected(Some(state.selected));
            frame.render_stateful_widget(ResultsList::new(items), body, &mut list_state);
        }

        ViewState::Error(description) => {
            render_message(
                frame,
                body,
                &format!("Search failed: {description}"),
                theme::STATUS_RED,
            );
        }
    }

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter search · ↑/↓ select · Esc quit",
            Style::default().fg(theme::TEXT_MUTED),
        )))
        .alignment(Alignment::Center),
        footer,
    );
}

fn areas(area: Rect) -> [Rect; 4] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(3), // query input
            Constraint::Min(1),    // body
            Constraint::Length(1), // key hints
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2], chunks[3]]
}

fn render_message(frame: &mut Frame, area: Rect, text: &str, color: ratatui::style::Color) {
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(color),
        )))
        .alignment(Alignment::Center),
        vertically_centered(area),
    );
}

/// One-line area in the vertical middle, for placeholder/status messages.
/// A collapsed region stays collapsed; it must not spill into neighbors.
fn vertically_centered(area: Rect) -> Rect {
    if area.height == 0 {
        return area;
    }
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.y + area.height - 1), area.width, 1)
}
