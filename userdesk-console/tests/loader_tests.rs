//! Detail fetch and seeding
//!
//! One fetch per mount, snapshot projection into the draft, and the
//! unavailable path for missing or failing lookups.

mod common;

use common::{Harness, user_one};
use userdesk_console::common::messages::CrossDomainEvent;
use userdesk_console::domains::user_update::UserUpdateMessage;
use userdesk_console::domains::user_update::state::LoadPhase;
use userdesk_console::infra::testing::{StubUserDirectory, fixtures};
use userdesk_model::{LanguageCode, UserRole};

#[tokio::test]
async fn loaded_fields_equal_snapshot_fields() {
    let mut harness = Harness::with_superadmin();
    harness.load().await;

    let snapshot = fixtures::superadmin_snapshot();
    let editor = harness.editor();
    assert_eq!(editor.phase, LoadPhase::Ready);
    assert_eq!(editor.store.first_name(), snapshot.first_name);
    assert_eq!(editor.store.last_name(), snapshot.last_name);
    assert_eq!(editor.store.email(), snapshot.email);
    assert!(editor.store.role().is_checked(UserRole::SuperAdmin));
    assert!(!editor.store.role().is_checked(UserRole::Admin));
    assert_eq!(
        editor.store.language().map(LanguageCode::as_str),
        Some(snapshot.app_language_code.as_str())
    );
    assert_eq!(editor.snapshot.as_ref(), Some(&snapshot));
    assert!(harness.notices.notices().is_empty());
}

#[tokio::test]
async fn activation_fetches_once_per_mount() {
    let mut harness = Harness::with_superadmin();
    harness.send(UserUpdateMessage::Activate);
    harness.send(UserUpdateMessage::Activate);
    assert_eq!(harness.editor().fetches_issued, 1);
    assert_eq!(harness.editor().phase, LoadPhase::Loading);

    harness.deliver_fetch().await;
    harness.send(UserUpdateMessage::Activate);
    assert_eq!(harness.editor().fetches_issued, 1);
    assert_eq!(harness.directory.fetch_calls(), vec![user_one()]);
}

#[tokio::test]
async fn missing_user_leaves_form_unavailable() {
    let mut harness = Harness::new(StubUserDirectory::new());
    let result = harness.load().await;

    assert_eq!(harness.editor().phase, LoadPhase::Unavailable);
    assert_eq!(
        result.events,
        vec![CrossDomainEvent::UserUnavailable(user_one())]
    );
    assert_eq!(harness.editor().store.first_name(), "");
    assert!(harness.editor().store.role().is_unset());
    assert!(harness.notices.notices().is_empty());
}

#[tokio::test]
async fn failed_fetch_is_handled_like_a_missing_user() {
    let directory =
        StubUserDirectory::new().with_user(user_one(), fixtures::superadmin_snapshot());
    directory.fail_fetches(true);
    let mut harness = Harness::new(directory);
    harness.load().await;

    assert_eq!(harness.editor().phase, LoadPhase::Unavailable);
    assert!(harness.editor().snapshot.is_none());
    assert!(harness.notices.notices().is_empty());
}

#[tokio::test]
async fn edits_are_ignored_once_unavailable() {
    let mut harness = Harness::new(StubUserDirectory::new());
    harness.load().await;

    harness.send(UserUpdateMessage::FirstNameChanged("Sumit".into()));
    harness.send(UserUpdateMessage::RoleSelected(UserRole::Admin));
    assert_eq!(harness.editor().store.first_name(), "");
    assert!(harness.editor().store.role().is_unset());
    assert!(!harness.editor().store.is_dirty());
}

#[tokio::test]
async fn snapshot_after_operator_edit_does_not_overwrite_draft() {
    let mut harness = Harness::with_superadmin();
    harness.send(UserUpdateMessage::Activate);
    harness.send(UserUpdateMessage::LastNameChanged("Maithani".into()));
    harness.deliver_fetch().await;

    let editor = harness.editor();
    assert_eq!(editor.phase, LoadPhase::Ready);
    assert_eq!(editor.store.last_name(), "Maithani");
    assert_eq!(editor.store.first_name(), "");
    assert!(editor.store.role().is_unset());
    assert!(editor.snapshot.is_some());
}

#[tokio::test]
async fn unsupported_snapshot_language_is_left_unselected() {
    let directory = StubUserDirectory::new()
        .with_user(user_one(), fixtures::snapshot_with_language("de"));
    let mut harness = Harness::new(directory);
    harness.load().await;

    assert_eq!(harness.editor().phase, LoadPhase::Ready);
    assert!(harness.editor().store.language().is_none());
    assert_eq!(harness.editor().store.email(), "adi790u@gmail.com");
}
