//! `Pomotask` — terminal focus timer with a task list.

pub mod app;
pub mod config;
pub mod ticker;
pub mod ui;
