//! Centralized theme and styling constants.

use ratatui::style::{Color, Modifier, Style};

const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);
const TEXT: Color = Color::Rgb(0xFA, 0xFA, 0xFA);
const MUTED: Color = Color::Rgb(0x4A, 0x4A, 0x4A);

pub struct Theme;

impl Theme {
    // Panel chrome
    pub const BORDER_FOCUSED: Style = Style::new().fg(ACCENT);
    pub const BORDER: Style = Style::new().fg(MUTED);
    pub const TITLE: Style = Style::new()
        .fg(TEXT)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD);

    // List rows
    pub const NORMAL: Style = Style::new().fg(TEXT);
    /// Cursor row of the focused panel.
    pub const SELECTED: Style = Style::new()
        .fg(ACCENT)
        .bg(TEXT)
        .add_modifier(Modifier::BOLD);
    /// Cursor row of an unfocused panel.
    pub const ACTIVE: Style = Style::new()
        .fg(TEXT)
        .bg(MUTED)
        .add_modifier(Modifier::BOLD);

    // Scrollbar
    pub const THUMB: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);
    pub const TRACK: Style = Style::new().fg(ACCENT);

    // Footer and dialogs
    pub const KEY: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    pub const HINT: Style = Style::new().fg(Color::Rgb(0xBD, 0x93, 0xF9));
    pub const MODAL_BORDER: Style = Style::new().fg(Color::Rgb(0xFF, 0x79, 0xC6));
    pub const WARNING: Style = Style::new()
        .fg(Color::Rgb(0xFF, 0x55, 0x55))
        .add_modifier(Modifier::BOLD);
}
