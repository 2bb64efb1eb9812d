//! Color palette for the search screen

use ratatui::style::Color;

// --- Background ---
pub const DEEPEST_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

// --- Results ---
pub const RESULT_TITLE: Color = Color::Cyan;
pub const RESULT_MATCH: Color = Color::Yellow;
pub const SELECTION_BG: Color = Color::DarkGray;
