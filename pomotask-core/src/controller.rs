//! Root controller: one state tree, one writer.
//!
//! The controller owns the [`Clock`] and the [`TaskList`] and routes each
//! [`Intent`] to whichever of the two owns the affected state. It adds no
//! rules of its own.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::error::ValidationError;
use crate::tasks::{TaskId, TaskList};

/// A request from the presentation layer to change state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    /// Start the countdown.
    Start,
    /// Pause the countdown.
    Pause,
    /// Return the clock to a paused, full focus phase.
    Reset,
    /// One second has elapsed.
    Tick,
    /// Append a task from the add form.
    AddTask {
        /// Raw form text, trimmed during validation.
        text: String,
    },
    /// Flip a task's done flag.
    ToggleTask {
        /// Task to toggle.
        id: TaskId,
    },
    /// Remove a task.
    DeleteTask {
        /// Task to remove.
        id: TaskId,
    },
    /// Start renaming a task.
    BeginEdit {
        /// Task to rename.
        id: TaskId,
        /// Text to seed the draft with.
        text: String,
    },
    /// Replace the rename draft.
    ChangeEditText {
        /// New draft text.
        text: String,
    },
    /// Save the rename draft.
    CommitEdit {
        /// Task the caller believes is being edited.
        id: TaskId,
    },
    /// Abandon the rename.
    CancelEdit,
}

/// Owned copy of the whole state tree, handed to renderers and tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Clock state.
    pub clock: Clock,
    /// Task list, add-form error, and edit session.
    pub tasks: TaskList,
}

/// Holds the single state tree and dispatches intents to it.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    clock: Clock,
    tasks: TaskList,
}

impl Controller {
    /// A paused full focus clock and an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only clock state.
    #[must_use]
    pub const fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Read-only task list state.
    #[must_use]
    pub const fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Clones the full state tree.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            clock: self.clock,
            tasks: self.tasks.clone(),
        }
    }

    /// Applies one intent to completion.
    ///
    /// Validation failures are also recorded in the task list (on the add
    /// form or the edit session) so a renderer can show them without
    /// holding on to this return value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] when [`Intent::AddTask`] or
    /// [`Intent::CommitEdit`] carries invalid text.
    pub fn dispatch(&mut self, intent: Intent) -> Result<(), ValidationError> {
        match intent {
            Intent::Start => self.clock.start(),
            Intent::Pause => self.clock.pause(),
            Intent::Reset => self.clock.reset(),
            Intent::Tick => self.clock.tick(),
            Intent::AddTask { text } => {
                self.tasks.add_task(&text)?;
            }
            Intent::ToggleTask { id } => {
                self.tasks.toggle_task(&id);
            }
            Intent::DeleteTask { id } => {
                self.tasks.delete_task(&id);
            }
            Intent::BeginEdit { id, text } => {
                self.tasks.begin_edit(&id, &text);
            }
            Intent::ChangeEditText { text } => {
                self.tasks.change_edit_text(&text);
            }
            Intent::CommitEdit { id } => {
                if !self.tasks.is_editing(&id) {
                    tracing::debug!(task_id = %id, "commit for stale edit ignored");
                    return Ok(());
                }
                self.tasks.commit_edit()?;
            }
            Intent::CancelEdit => {
                self.tasks.cancel_edit();
            }
        }
        Ok(())
    }
}
