//! Countdown clock rendering.

use pomotask_core::Phase;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the phase heading, the `MM : SS` boxes, and the run state.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Clock;
    let clock = app.controller.clock();

    let title_color = match clock.phase() {
        Phase::Focus => theme::FOCUS_TITLE,
        Phase::Break => theme::BREAK_TITLE,
    };

    let digits = Line::from(vec![
        Span::styled(format!("  {:02}  ", clock.minutes()), theme::timer_digits()),
        Span::styled(" : ", theme::bold()),
        Span::styled(format!("  {:02}  ", clock.seconds()), theme::timer_digits()),
    ]);
    let labels = Line::from(vec![
        Span::styled("Minutes", theme::dimmed()),
        Span::raw("    "),
        Span::styled("Seconds", theme::dimmed()),
    ]);
    let state = if clock.is_running() {
        Span::styled("● running", theme::normal().fg(theme::SUCCESS))
    } else {
        Span::styled("● paused", theme::normal().fg(theme::WARNING))
    };

    let block = Block::default()
        .title(Span::styled(
            clock.phase().label(),
            theme::panel_title(title_color),
        ))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let paragraph = Paragraph::new(vec![
        Line::default(),
        digits,
        labels,
        Line::default(),
        Line::from(state),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}
