//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Running indicator color.
pub const SUCCESS: Color = Color::Green;

/// Paused indicator color.
pub const WARNING: Color = Color::Yellow;

/// Validation error color.
pub const ERROR: Color = Color::Rgb(239, 68, 68);

/// Heading color during a focus phase.
pub const FOCUS_TITLE: Color = Color::White;

/// Heading color during a break phase.
pub const BREAK_TITLE: Color = Color::Rgb(167, 243, 208);

/// Background of the minute/second boxes.
pub const TIMER_BOX_BG: Color = Color::Rgb(11, 18, 32);

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (labels, placeholders).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Completed task style (dim, struck through).
#[must_use]
pub fn done() -> Style {
    dimmed().add_modifier(Modifier::CROSSED_OUT)
}

/// Validation error message style.
#[must_use]
pub fn error() -> Style {
    Style::default().fg(ERROR)
}

/// Style for the big minute/second digits.
#[must_use]
pub fn timer_digits() -> Style {
    Style::default()
        .fg(FG_PRIMARY)
        .bg(TIMER_BOX_BG)
        .add_modifier(Modifier::BOLD)
}

/// Border style for a panel, highlighted when focused.
#[must_use]
pub fn border(focused: bool) -> Style {
    if focused { highlighted() } else { normal() }
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
