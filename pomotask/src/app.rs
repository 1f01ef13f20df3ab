//! Application state and event handling.
//!
//! `App` is the presentation layer's view of the world: it owns the
//! [`Controller`] plus purely visual state (focus, add-form text, selection)
//! and turns key presses into [`Intent`]s.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pomotask_core::{Controller, Intent, Task, TaskId};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Countdown clock controls.
    Clock,
    /// Add-task input box (default).
    Input,
    /// Task list.
    Tasks,
}

/// Main application state.
pub struct App {
    /// Single owner of the clock and task list state.
    pub controller: Controller,
    /// Current add-form text.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected task index in the list.
    pub selected_task: usize,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new application with a fresh clock and empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            controller: Controller::new(),
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected_task: 0,
            should_quit: false,
        }
    }

    /// Whether the clock wants ticks.
    #[must_use]
    pub const fn clock_running(&self) -> bool {
        self.controller.clock().is_running()
    }

    /// The task under the selection cursor, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Task> {
        self.controller.tasks().tasks().get(self.selected_task)
    }

    /// Id of the task being renamed, if any.
    #[must_use]
    pub fn editing_id(&self) -> Option<TaskId> {
        self.controller
            .tasks()
            .edit_session()
            .map(|s| s.target.clone())
    }

    /// Applies one intent. Validation errors are already recorded in the
    /// task list for rendering, so they are only logged here.
    pub fn dispatch(&mut self, intent: Intent) {
        if let Err(e) = self.controller.dispatch(intent) {
            tracing::debug!(error = e.code(), "intent rejected");
        }
        self.clamp_selection();
    }

    /// Applies one elapsed second from the tick schedule.
    pub fn tick(&mut self) {
        self.dispatch(Intent::Tick);
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Esc, _) => {
                if self.editing_id().is_some() {
                    self.dispatch(Intent::CancelEdit);
                } else {
                    self.should_quit = true;
                }
                return;
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) | (KeyCode::BackTab, _) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Clock => self.handle_clock_key(key),
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => {
                if self.editing_id().is_some() {
                    self.handle_edit_key(key);
                } else {
                    self.handle_tasks_key(key);
                }
            }
        }
    }

    /// Handle key event when the clock is focused.
    fn handle_clock_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('s') => self.dispatch(Intent::Start),
            KeyCode::Char('p') => self.dispatch(Intent::Pause),
            KeyCode::Char('r') => self.dispatch(Intent::Reset),
            KeyCode::Char(' ') => {
                if self.clock_running() {
                    self.dispatch(Intent::Pause);
                } else {
                    self.dispatch(Intent::Start);
                }
            }
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused and nothing is being
    /// renamed.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.prev_task(),
            KeyCode::Down | KeyCode::Char('j') => self.next_task(),
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected().map(|t| t.id.clone()) {
                    self.dispatch(Intent::ToggleTask { id });
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected().map(|t| t.id.clone()) {
                    self.dispatch(Intent::DeleteTask { id });
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some((id, text)) = self.selected().map(|t| (t.id.clone(), t.text.clone())) {
                    self.dispatch(Intent::BeginEdit { id, text });
                }
            }
            _ => {}
        }
    }

    /// Handle key event while a task is being renamed.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(session) = self.controller.tasks().edit_session() else {
            return;
        };
        let mut draft = session.draft.clone();
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Char(c) => {
                draft.push(c);
                self.dispatch(Intent::ChangeEditText { text: draft });
            }
            KeyCode::Backspace => {
                draft.pop();
                self.dispatch(Intent::ChangeEditText { text: draft });
            }
            _ => {}
        }
    }

    /// Commits the active rename, if any.
    fn commit_edit(&mut self) {
        if let Some(id) = self.editing_id() {
            self.dispatch(Intent::CommitEdit { id });
        }
    }

    /// Cycle focus forward: Clock -> Input -> Tasks -> Clock.
    fn cycle_focus_forward(&mut self) {
        let next = match self.focus {
            PanelFocus::Clock => PanelFocus::Input,
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Clock,
        };
        self.change_focus(next);
    }

    /// Cycle focus backward: Clock -> Tasks -> Input -> Clock.
    fn cycle_focus_backward(&mut self) {
        let next = match self.focus {
            PanelFocus::Clock => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
            PanelFocus::Input => PanelFocus::Clock,
        };
        self.change_focus(next);
    }

    /// Moves focus, committing an open rename when the task list loses
    /// focus (save on blur).
    fn change_focus(&mut self, next: PanelFocus) {
        let previous = std::mem::replace(&mut self.focus, next);
        if previous == PanelFocus::Tasks && next != PanelFocus::Tasks {
            self.commit_edit();
        }
    }

    /// Submit the current input as a new task.
    ///
    /// The input is cleared only when the task was accepted; on rejection
    /// the text stays so it can be fixed.
    fn submit_task(&mut self) {
        let intent = Intent::AddTask {
            text: self.input.clone(),
        };
        match self.controller.dispatch(intent) {
            Ok(()) => {
                self.input.clear();
                self.cursor_position = 0;
                self.selected_task = self.controller.tasks().len().saturating_sub(1);
            }
            Err(e) => tracing::debug!(error = e.code(), "task rejected"),
        }
    }

    /// Byte offset of the given character index in the input.
    fn byte_index(&self, char_index: usize) -> usize {
        self.input
            .char_indices()
            .nth(char_index)
            .map_or(self.input.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let index = self.byte_index(self.cursor_position);
        self.input.insert(index, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let index = self.byte_index(self.cursor_position - 1);
            self.input.remove(index);
            self.cursor_position -= 1;
        }
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task.
    const fn prev_task(&mut self) {
        if self.selected_task > 0 {
            self.selected_task -= 1;
        }
    }

    /// Select the next task.
    fn next_task(&mut self) {
        if self.selected_task < self.controller.tasks().len().saturating_sub(1) {
            self.selected_task += 1;
        }
    }

    /// Keep the selection inside the list after deletions.
    fn clamp_selection(&mut self) {
        let last = self.controller.tasks().len().saturating_sub(1);
        self.selected_task = self.selected_task.min(last);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
