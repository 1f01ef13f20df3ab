//! Task panel rendering (add form + task list).

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the add form above the task list, each with its error line.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Add form
            Constraint::Length(1), // Add error
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Edit error
        ])
        .split(area);

    render_input(frame, chunks[0], app);
    render_error(frame, chunks[1], app.controller.tasks().add_error());
    render_list(frame, chunks[2], app);
    render_error(frame, chunks[3], app.controller.tasks().edit_error());
}

/// Render the add-task input box.
fn render_input(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input;

    let input_line = if app.input.is_empty() && !is_focused {
        Line::from(Span::styled("Add a new task...", theme::dimmed()))
    } else {
        let mut display_text = app.input.clone();
        if is_focused {
            let index = display_text
                .char_indices()
                .nth(app.cursor_position)
                .map_or(display_text.len(), |(i, _)| i);
            display_text.insert(index, '█');
        }
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title("My Tasks")
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    frame.render_widget(Paragraph::new(input_line).block(block), area);
}

/// Render the task list, with the renamed task shown as its draft.
fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let tasks = app.controller.tasks();

    let items: Vec<ListItem> = tasks
        .tasks()
        .iter()
        .map(|task| {
            let checkbox = if task.done { "[✓]" } else { "[ ]" };
            let text = match tasks.edit_session() {
                Some(session) if session.target == task.id => Span::styled(
                    format!("{}█", session.draft),
                    theme::normal().fg(theme::HIGHLIGHT),
                ),
                _ if task.done => Span::styled(task.text.as_str(), theme::done()),
                _ => Span::styled(task.text.as_str(), theme::normal()),
            };

            ListItem::new(Line::from(vec![
                Span::styled(checkbox, theme::normal()),
                Span::raw(" "),
                text,
            ]))
        })
        .collect();

    let title = format!("Tasks ({}/{})", tasks.done_count(), tasks.len());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let list = List::new(items).block(block).highlight_style(if is_focused {
        theme::selected()
    } else {
        theme::highlighted()
    });

    let mut state = ListState::default();
    if !tasks.is_empty() {
        state.select(Some(app.selected_task));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render a single validation error line, or nothing.
fn render_error(frame: &mut Frame, area: Rect, error: Option<pomotask_core::ValidationError>) {
    if let Some(error) = error {
        let line = Line::from(Span::styled(error.to_string(), theme::error()));
        frame.render_widget(Paragraph::new(line), area);
    }
}
