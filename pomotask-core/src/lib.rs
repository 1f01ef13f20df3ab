//! Core state machines for `Pomotask`: a focus/break countdown clock and a
//! task list with single-slot rename, composed under one controller.

pub mod clock;
pub mod controller;
pub mod error;
pub mod tasks;

pub use clock::{BREAK_SECONDS, Clock, FOCUS_SECONDS, Phase};
pub use controller::{Controller, Intent, Snapshot};
pub use error::{MIN_TASK_TEXT_LENGTH, ValidationError, validate_task_text};
pub use tasks::{EditSession, Task, TaskId, TaskList};
