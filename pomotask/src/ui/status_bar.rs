//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Key hints for the focused panel.
#[must_use]
pub fn help_text(app: &App) -> &'static str {
    match app.focus {
        PanelFocus::Clock => "s: start | p: pause | Space: start/pause | r: reset | Tab: switch panel | q: quit",
        PanelFocus::Input => "Enter: add task | Tab: switch panel | ←→: move cursor | Esc: quit",
        PanelFocus::Tasks if app.editing_id().is_some() => {
            "Enter: save | Esc: cancel | Tab: save and leave"
        }
        PanelFocus::Tasks => {
            "↑↓/jk: navigate | Space: toggle | Enter/e: rename | d: delete | Tab: switch panel"
        }
    }
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App, show_help: bool) {
    let (dot_color, status_text) = if app.clock_running() {
        (theme::SUCCESS, "Running")
    } else {
        (theme::WARNING, "Paused")
    };

    let tasks = app.controller.tasks();
    let mut spans = vec![
        Span::styled(concat!("Pomotask v", env!("CARGO_PKG_VERSION")), theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(dot_color)),
        Span::raw(format!(" {status_text}")),
        Span::raw(" | "),
        Span::raw(format!("{}/{} done", tasks.done_count(), tasks.len())),
    ];
    if show_help {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(help_text(app), theme::dimmed()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
