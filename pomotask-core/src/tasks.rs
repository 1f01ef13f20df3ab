//! Ordered task list with a single-slot edit session.
//!
//! `TaskList` owns every [`Task`] plus at most one [`EditSession`]. All text
//! entering the list, whether from the add form or from a rename, passes
//! through [`validate_task_text`] so both paths accept exactly the same input.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ValidationError, validate_task_text};

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Trimmed text, at least three characters.
    pub text: String,
    /// Whether the task has been checked off.
    pub done: bool,
}

/// An in-progress rename of one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EditSession {
    /// Task being renamed.
    pub target: TaskId,
    /// Unsaved text as typed so far.
    pub draft: String,
    /// Error from the last failed commit, if any.
    pub error: Option<ValidationError>,
}

/// Ordered task collection plus the add-form error and the edit session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskList {
    tasks: Vec<Task>,
    add_error: Option<ValidationError>,
    edit: Option<EditSession>,
}

impl TaskList {
    /// Creates an empty task list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in display (insertion) order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list has no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of tasks marked done.
    #[must_use]
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// Error left by the last rejected [`add_task`](Self::add_task).
    #[must_use]
    pub const fn add_error(&self) -> Option<ValidationError> {
        self.add_error
    }

    /// The active edit session, if any.
    #[must_use]
    pub const fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Error attached to the active edit session, if any.
    #[must_use]
    pub fn edit_error(&self) -> Option<ValidationError> {
        self.edit.as_ref().and_then(|s| s.error)
    }

    /// Whether the given task is currently being renamed.
    #[must_use]
    pub fn is_editing(&self, id: &TaskId) -> bool {
        self.edit.as_ref().is_some_and(|s| &s.target == id)
    }

    /// Appends a new open task with the trimmed text.
    ///
    /// On success any previous add-form error is cleared. On failure the
    /// error is recorded for the add form and the list is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] produced by [`validate_task_text`].
    pub fn add_task(&mut self, raw: &str) -> Result<TaskId, ValidationError> {
        let text = match validate_task_text(raw) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::debug!(error = e.code(), "add rejected");
                self.add_error = Some(e);
                return Err(e);
            }
        };

        let id = TaskId::new();
        tracing::debug!(task_id = %id, "task added");
        self.tasks.push(Task {
            id: id.clone(),
            text,
            done: false,
        });
        self.add_error = None;
        Ok(id)
    }

    /// Flips the done flag. Returns `false` if the id is unknown, which is
    /// not an error: the task may have been deleted in the meantime.
    pub fn toggle_task(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| &t.id == id) else {
            return false;
        };
        task.done = !task.done;
        tracing::debug!(task_id = %id, done = task.done, "task toggled");
        true
    }

    /// Removes a task, keeping the order of the rest.
    ///
    /// An edit session targeting the task is canceled along with its error.
    /// Returns `false` if the id is unknown.
    pub fn delete_task(&mut self, id: &TaskId) -> bool {
        let Some(index) = self.tasks.iter().position(|t| &t.id == id) else {
            return false;
        };
        self.tasks.remove(index);
        if self.is_editing(id) {
            tracing::debug!(task_id = %id, "edit target deleted, session canceled");
            self.edit = None;
        }
        tracing::debug!(task_id = %id, "task deleted");
        true
    }

    /// Opens an edit session for `id` seeded with `current_text`.
    ///
    /// Any session for another task is discarded without saving. Returns
    /// `false` (and leaves any existing session alone) if the id is unknown.
    pub fn begin_edit(&mut self, id: &TaskId, current_text: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        if let Some(previous) = self.edit.as_ref().filter(|s| &s.target != id) {
            tracing::debug!(task_id = %previous.target, "unsaved edit discarded");
        }
        self.edit = Some(EditSession {
            target: id.clone(),
            draft: current_text.to_string(),
            error: None,
        });
        true
    }

    /// Replaces the draft text. Returns `false` if no session is active.
    pub fn change_edit_text(&mut self, text: &str) -> bool {
        let Some(session) = self.edit.as_mut() else {
            return false;
        };
        text.clone_into(&mut session.draft);
        true
    }

    /// Validates the draft and writes it to the target task.
    ///
    /// Returns `Ok(Some(id))` when the rename was saved and `Ok(None)` when
    /// there was nothing to commit. On success the session is closed.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for an invalid draft. The session
    /// stays open with the error attached and the task is not modified.
    pub fn commit_edit(&mut self) -> Result<Option<TaskId>, ValidationError> {
        let Some(session) = self.edit.as_mut() else {
            return Ok(None);
        };

        let text = match validate_task_text(&session.draft) {
            Ok(text) => text.to_string(),
            Err(e) => {
                tracing::debug!(task_id = %session.target, error = e.code(), "edit rejected");
                session.error = Some(e);
                return Err(e);
            }
        };

        let target = session.target.clone();
        self.edit = None;
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == target) else {
            return Ok(None);
        };
        task.text = text;
        tracing::debug!(task_id = %target, "task renamed");
        Ok(Some(target))
    }

    /// Drops the active session and its error. Returns `false` if there was
    /// no session.
    pub fn cancel_edit(&mut self) -> bool {
        self.edit.take().is_some()
    }
}
