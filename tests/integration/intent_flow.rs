//! Integration tests driving the controller purely through intents.
//!
//! Covers the full focus/break cycle, the add/toggle/delete/rename flows,
//! the single-edit-session rule, and the JSON shape of intents and
//! snapshots.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use pomotask_core::{Controller, Intent, Phase, TaskId, ValidationError};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn add(ctl: &mut Controller, text: &str) -> Result<(), ValidationError> {
    ctl.dispatch(Intent::AddTask {
        text: text.to_string(),
    })
}

fn id_at(ctl: &Controller, index: usize) -> TaskId {
    ctl.tasks().tasks()[index].id.clone()
}

fn texts(ctl: &Controller) -> Vec<String> {
    ctl.tasks().tasks().iter().map(|t| t.text.clone()).collect()
}

fn tick_n(ctl: &mut Controller, n: u32) {
    for _ in 0..n {
        ctl.dispatch(Intent::Tick).unwrap();
    }
}

// ===========================================================================
// Clock
// ===========================================================================

#[test]
fn full_cycle_focus_break_focus() {
    let mut ctl = Controller::new();
    ctl.dispatch(Intent::Start).unwrap();

    tick_n(&mut ctl, 1500);
    assert_eq!(ctl.clock().phase(), Phase::Focus);
    assert_eq!(ctl.clock().display(), "00:00");

    tick_n(&mut ctl, 1);
    assert_eq!(ctl.clock().phase(), Phase::Break);
    assert_eq!(ctl.clock().display(), "05:00");

    tick_n(&mut ctl, 301);
    assert_eq!(ctl.clock().phase(), Phase::Focus);
    assert_eq!(ctl.clock().display(), "25:00");
    assert!(ctl.clock().is_running());
}

#[test]
fn pause_freezes_and_start_resumes() {
    let mut ctl = Controller::new();
    ctl.dispatch(Intent::Start).unwrap();
    tick_n(&mut ctl, 10);
    ctl.dispatch(Intent::Pause).unwrap();
    tick_n(&mut ctl, 10);
    assert_eq!(ctl.clock().display(), "24:50");
    ctl.dispatch(Intent::Start).unwrap();
    tick_n(&mut ctl, 10);
    assert_eq!(ctl.clock().display(), "24:40");
}

#[test]
fn reset_during_break_returns_to_paused_focus() {
    let mut ctl = Controller::new();
    ctl.dispatch(Intent::Start).unwrap();
    tick_n(&mut ctl, 1600);
    assert_eq!(ctl.clock().phase(), Phase::Break);
    ctl.dispatch(Intent::Reset).unwrap();
    assert_eq!(ctl.clock().phase(), Phase::Focus);
    assert_eq!(ctl.clock().remaining_secs(), 1500);
    assert!(!ctl.clock().is_running());
}

// ===========================================================================
// Task list
// ===========================================================================

#[test]
fn invalid_adds_leave_collection_unchanged() {
    let mut ctl = Controller::new();
    assert_eq!(add(&mut ctl, ""), Err(ValidationError::Empty));
    assert_eq!(add(&mut ctl, "  "), Err(ValidationError::Empty));
    assert_eq!(add(&mut ctl, "ab"), Err(ValidationError::TooShort));
    assert!(ctl.tasks().is_empty());

    add(&mut ctl, " gox ").unwrap();
    assert_eq!(texts(&ctl), ["gox"]);
    assert!(!ctl.tasks().tasks()[0].done);
    assert_eq!(ctl.tasks().add_error(), None);
}

#[test]
fn toggle_and_delete_races_are_noops() {
    let mut ctl = Controller::new();
    add(&mut ctl, "task one").unwrap();
    let id = id_at(&ctl, 0);
    ctl.dispatch(Intent::DeleteTask { id: id.clone() }).unwrap();
    ctl.dispatch(Intent::ToggleTask { id: id.clone() }).unwrap();
    ctl.dispatch(Intent::DeleteTask { id }).unwrap();
    assert!(ctl.tasks().is_empty());
}

#[test]
fn delete_keeps_order_of_remaining() {
    let mut ctl = Controller::new();
    for text in ["alpha", "bravo", "charlie", "delta"] {
        add(&mut ctl, text).unwrap();
    }
    let bravo = id_at(&ctl, 1);
    ctl.dispatch(Intent::DeleteTask { id: bravo }).unwrap();
    add(&mut ctl, "echo").unwrap();
    assert_eq!(texts(&ctl), ["alpha", "charlie", "delta", "echo"]);
}

// ===========================================================================
// Edit session
// ===========================================================================

#[test]
fn rename_round_trip() {
    let mut ctl = Controller::new();
    add(&mut ctl, "original").unwrap();
    let id = id_at(&ctl, 0);

    ctl.dispatch(Intent::BeginEdit {
        id: id.clone(),
        text: "x".to_string(),
    })
    .unwrap();
    ctl.dispatch(Intent::ChangeEditText {
        text: "xyz".to_string(),
    })
    .unwrap();
    ctl.dispatch(Intent::CommitEdit { id }).unwrap();

    assert_eq!(texts(&ctl), ["xyz"]);
    assert!(ctl.tasks().edit_session().is_none());
}

#[test]
fn deleting_edited_task_cancels_session() {
    let mut ctl = Controller::new();
    add(&mut ctl, "doomed").unwrap();
    let id = id_at(&ctl, 0);
    ctl.dispatch(Intent::BeginEdit {
        id: id.clone(),
        text: "doomed".to_string(),
    })
    .unwrap();
    ctl.dispatch(Intent::DeleteTask { id: id.clone() }).unwrap();

    assert!(ctl.tasks().edit_session().is_none());
    ctl.dispatch(Intent::CommitEdit { id }).unwrap();
    assert!(ctl.tasks().is_empty());
}

#[test]
fn invalid_commit_keeps_session_open() {
    let mut ctl = Controller::new();
    add(&mut ctl, "keep me").unwrap();
    let id = id_at(&ctl, 0);
    ctl.dispatch(Intent::BeginEdit {
        id: id.clone(),
        text: "no".to_string(),
    })
    .unwrap();

    let err = ctl.dispatch(Intent::CommitEdit { id: id.clone() });
    assert_eq!(err, Err(ValidationError::TooShort));
    assert!(ctl.tasks().is_editing(&id));
    assert_eq!(ctl.tasks().edit_error(), Some(ValidationError::TooShort));
    assert_eq!(texts(&ctl), ["keep me"]);

    ctl.dispatch(Intent::CancelEdit).unwrap();
    assert!(ctl.tasks().edit_session().is_none());
    assert_eq!(ctl.tasks().edit_error(), None);
    assert_eq!(texts(&ctl), ["keep me"]);
}

#[test]
fn only_one_session_after_many_begins() {
    let mut ctl = Controller::new();
    for text in ["one", "two", "three"] {
        add(&mut ctl, text).unwrap();
    }
    for index in [0, 2, 1, 0, 2] {
        let id = id_at(&ctl, index);
        ctl.dispatch(Intent::BeginEdit {
            id,
            text: "draft".to_string(),
        })
        .unwrap();
    }
    let editing: Vec<_> = ctl
        .tasks()
        .tasks()
        .iter()
        .filter(|t| ctl.tasks().is_editing(&t.id))
        .collect();
    assert_eq!(editing.len(), 1);
    assert_eq!(editing[0].text, "three");
    assert_eq!(texts(&ctl), ["one", "two", "three"]);
}

#[test]
fn clock_keeps_running_during_edits() {
    let mut ctl = Controller::new();
    add(&mut ctl, "focus work").unwrap();
    let id = id_at(&ctl, 0);
    ctl.dispatch(Intent::Start).unwrap();
    ctl.dispatch(Intent::BeginEdit {
        id: id.clone(),
        text: "focus work".to_string(),
    })
    .unwrap();
    tick_n(&mut ctl, 5);
    ctl.dispatch(Intent::CommitEdit { id }).unwrap();
    assert_eq!(ctl.clock().remaining_secs(), 1495);
}

// ===========================================================================
// Serialization
// ===========================================================================

#[test]
fn intents_use_tagged_json() {
    let json = serde_json::to_value(Intent::AddTask {
        text: "write tests".to_string(),
    })
    .unwrap();
    assert_eq!(json["intent"], "add_task");
    assert_eq!(json["text"], "write tests");

    let parsed: Intent = serde_json::from_str(r#"{"intent":"start"}"#).unwrap();
    assert_eq!(parsed, Intent::Start);
}

#[test]
fn task_intents_round_trip_ids() {
    let id = TaskId::new();
    let json = serde_json::to_string(&Intent::ToggleTask { id: id.clone() }).unwrap();
    let parsed: Intent = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Intent::ToggleTask { id });
}

#[test]
fn task_ids_serialize_as_plain_uuid_strings() {
    let uuid = uuid::Uuid::parse_str("0190a5e4-7c3b-7d2e-9f10-2b3c4d5e6f70").unwrap();
    let id = TaskId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), &uuid);

    let json = serde_json::to_value(Intent::DeleteTask { id: id.clone() }).unwrap();
    assert_eq!(json["intent"], "delete_task");
    assert_eq!(json["id"], "0190a5e4-7c3b-7d2e-9f10-2b3c4d5e6f70");

    let parsed: Intent = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, Intent::DeleteTask { id });
}

#[test]
fn snapshot_serializes_state_tree() {
    let mut ctl = Controller::new();
    add(&mut ctl, "serialize me").unwrap();
    add(&mut ctl, "x").unwrap_err();
    let json = serde_json::to_value(ctl.snapshot()).unwrap();

    assert_eq!(json["clock"]["phase"], "Focus");
    assert_eq!(json["clock"]["remaining_secs"], 1500);
    assert_eq!(json["clock"]["running"], false);
    assert_eq!(json["tasks"]["tasks"][0]["text"], "serialize me");
    assert_eq!(json["tasks"]["add_error"], "too_short");
    assert!(json["tasks"]["edit"].is_null());
}
