//! Profile editor update handlers

use std::path::PathBuf;

use iced::Task;
use log::{debug, error, info, warn};
use userdesk_contracts::{UpdateUserAck, UpdateUserRequest};
use userdesk_model::{AvatarFile, LanguageCode, UserRole, UserSnapshot};

use super::messages::UserUpdateMessage;
use super::state::{LoadPhase, SeedOutcome};
use super::tasks;
use crate::common::messages::{
    CrossDomainEvent, DomainMessage, DomainUpdateResult,
};
use crate::infra::services::Notice;
use crate::state::State;

pub const SAVED_NOTICE: &str = "User updated successfully.";
pub const NOT_LOADED_NOTICE: &str = "User details are not loaded yet.";

/// Main message handler for the profile editor
pub fn update_user_update(
    state: &mut State,
    message: UserUpdateMessage,
) -> DomainUpdateResult {
    debug!("[UserUpdate] {}", message.name());

    match message {
        UserUpdateMessage::Activate => handle_activate(state),
        UserUpdateMessage::UserLoaded(result) => {
            handle_user_loaded(state, result)
        }

        UserUpdateMessage::FirstNameChanged(v) => {
            edit(state, |store| store.set_first_name(v))
        }
        UserUpdateMessage::LastNameChanged(v) => {
            edit(state, |store| store.set_last_name(v))
        }
        UserUpdateMessage::EmailChanged(v) => {
            edit(state, |store| store.set_email(v))
        }
        UserUpdateMessage::RoleSelected(role) => {
            handle_role_selected(state, role)
        }
        UserUpdateMessage::LanguageSelected(code) => {
            handle_language_selected(state, code)
        }

        UserUpdateMessage::AvatarPathChanged(path) => {
            state.domains.user_update.state.avatar_input.path = path;
            DomainUpdateResult::none()
        }
        UserUpdateMessage::AttachAvatar => {
            let raw = state.domains.user_update.state.avatar_input.path.trim();
            if raw.is_empty() {
                return DomainUpdateResult::none();
            }
            let path = PathBuf::from(raw);
            handle_read_avatar(state, path)
        }
        UserUpdateMessage::AvatarDropped(path) => handle_read_avatar(state, path),
        UserUpdateMessage::AvatarRead(ticket, result) => {
            handle_avatar_read(state, ticket, result)
        }

        UserUpdateMessage::Submit => handle_submit(state),
        UserUpdateMessage::SubmitCompleted(result) => {
            handle_submit_result(state, result)
        }
        UserUpdateMessage::Cancel => handle_cancel(state),
    }
}

fn fetch_task(state: &mut State) -> Task<DomainMessage> {
    let domain = &mut state.domains.user_update;
    domain.state.fetches_issued += 1;
    let directory = domain.directory.clone();
    let id = domain.state.user_id.clone();
    Task::perform(tasks::load_user(directory, id), |result| {
        DomainMessage::from(UserUpdateMessage::UserLoaded(result))
    })
}

pub fn handle_activate(state: &mut State) -> DomainUpdateResult {
    let editor = &mut state.domains.user_update.state;
    if editor.phase != LoadPhase::Idle {
        debug!("[UserUpdate] Already activated ({:?})", editor.phase);
        return DomainUpdateResult::none();
    }

    info!("[UserUpdate] Loading user {}", editor.user_id);
    editor.phase = LoadPhase::Loading;
    DomainUpdateResult::task(fetch_task(state))
}

pub fn handle_user_loaded(
    state: &mut State,
    result: Result<Option<UserSnapshot>, String>,
) -> DomainUpdateResult {
    let editor = &mut state.domains.user_update.state;

    let snapshot = match result {
        Ok(Some(snapshot)) => snapshot,
        Ok(None) | Err(_) if editor.phase == LoadPhase::Loading => {
            warn!("[UserUpdate] User {} is unavailable", editor.user_id);
            editor.phase = LoadPhase::Unavailable;
            return DomainUpdateResult::with_events(
                Task::none(),
                vec![CrossDomainEvent::UserUnavailable(editor.user_id.clone())],
            );
        }
        Ok(None) => {
            warn!(
                "[UserUpdate] Refetch found no record for {}; keeping form",
                editor.user_id
            );
            return DomainUpdateResult::none();
        }
        Err(err) => {
            warn!("[UserUpdate] Refetch failed, keeping form: {}", err);
            return DomainUpdateResult::none();
        }
    };

    if editor.phase == LoadPhase::Unavailable {
        debug!("[UserUpdate] Ignoring snapshot for an unavailable mount");
        return DomainUpdateResult::none();
    }

    match editor.store.seed(&snapshot, &editor.languages) {
        SeedOutcome::Seeded => {
            info!("[UserUpdate] Loaded {}", snapshot.display_name())
        }
        SeedOutcome::KeptOperatorEdits => info!(
            "[UserUpdate] Loaded {} after operator edits; draft kept",
            snapshot.display_name()
        ),
    }
    if !editor.languages.contains(&snapshot.app_language_code) {
        warn!(
            "[UserUpdate] Language '{}' is not offered; left unselected",
            snapshot.app_language_code
        );
    }

    editor.snapshot = Some(snapshot);
    editor.phase = LoadPhase::Ready;
    DomainUpdateResult::none()
}

fn edit(
    state: &mut State,
    apply: impl FnOnce(&mut super::state::FieldStore),
) -> DomainUpdateResult {
    let editor = &mut state.domains.user_update.state;
    if !editor.is_usable() {
        debug!("[UserUpdate] Edit ignored, form is unavailable");
        return DomainUpdateResult::none();
    }
    apply(&mut editor.store);
    DomainUpdateResult::none()
}

fn handle_role_selected(state: &mut State, role: UserRole) -> DomainUpdateResult {
    edit(state, |store| store.select_role(role))
}

fn handle_language_selected(
    state: &mut State,
    code: LanguageCode,
) -> DomainUpdateResult {
    let editor = &mut state.domains.user_update.state;
    if !editor.is_usable() {
        return DomainUpdateResult::none();
    }
    if let Err(err) = editor.store.select_language(&editor.languages, code.as_str())
    {
        warn!("[UserUpdate] {}", err);
    }
    DomainUpdateResult::none()
}

fn handle_read_avatar(state: &mut State, path: PathBuf) -> DomainUpdateResult {
    let editor = &mut state.domains.user_update.state;
    if !editor.is_usable() {
        return DomainUpdateResult::none();
    }

    let ticket = editor.avatar_input.begin_read();
    debug!(
        "[UserUpdate] Reading avatar from {} (read {})",
        path.display(),
        ticket
    );
    DomainUpdateResult::task(Task::perform(
        tasks::read_avatar(path),
        move |result| {
            DomainMessage::from(UserUpdateMessage::AvatarRead(ticket, result))
        },
    ))
}

fn handle_avatar_read(
    state: &mut State,
    ticket: u64,
    result: Result<AvatarFile, String>,
) -> DomainUpdateResult {
    let domain = &mut state.domains.user_update;
    if !domain.state.avatar_input.finish_read(ticket) {
        debug!("[UserUpdate] Dropping superseded avatar read {}", ticket);
        return DomainUpdateResult::none();
    }

    match result {
        Ok(avatar) if domain.state.is_usable() => {
            info!(
                "[UserUpdate] Staged avatar {} ({} bytes)",
                avatar.file_name(),
                avatar.len()
            );
            domain.state.store.stage_avatar(avatar);
            domain.state.avatar_input.path.clear();
        }
        Ok(_) => {}
        Err(err) => {
            warn!("[UserUpdate] Avatar rejected: {}", err);
            domain.notices.notify(Notice::error(err));
        }
    }
    DomainUpdateResult::none()
}

pub fn handle_submit(state: &mut State) -> DomainUpdateResult {
    let domain = &mut state.domains.user_update;

    if domain.state.submitting() {
        debug!("[UserUpdate] Submit ignored, update already in flight");
        return DomainUpdateResult::none();
    }
    if domain.state.phase != LoadPhase::Ready {
        domain.notices.notify(Notice::error(NOT_LOADED_NOTICE));
        return DomainUpdateResult::none();
    }

    let request = match UpdateUserRequest::from_draft(domain.state.store.draft())
    {
        Ok(request) => request,
        Err(err) => {
            warn!("[UserUpdate] Draft incomplete: {}", err);
            domain.notices.notify(Notice::error(err.to_string()));
            return DomainUpdateResult::none();
        }
    };

    domain.state.in_flight = Some(request.clone());
    let directory = domain.directory.clone();
    DomainUpdateResult::task(Task::perform(
        tasks::dispatch_update(directory, request),
        |result| DomainMessage::from(UserUpdateMessage::SubmitCompleted(result)),
    ))
}

pub fn handle_submit_result(
    state: &mut State,
    result: Result<UpdateUserAck, String>,
) -> DomainUpdateResult {
    let domain = &mut state.domains.user_update;
    let Some(saved) = domain.state.in_flight.take() else {
        debug!("[UserUpdate] Stray submit result ignored");
        return DomainUpdateResult::none();
    };

    match result {
        Ok(ack) => {
            info!(
                "[UserUpdate] Update accepted for {} (ack: {:?})",
                domain.state.user_id, ack.id
            );
            domain.notices.notify(Notice::success(SAVED_NOTICE));
            // Only a draft identical to what was sent may be reseeded.
            let current =
                UpdateUserRequest::from_draft(domain.state.store.draft()).ok();
            if current.as_ref() == Some(&saved) {
                domain.state.store.mark_clean();
            } else {
                info!("[UserUpdate] Draft changed during save; edits kept");
            }
            let user_id = domain.state.user_id.clone();
            DomainUpdateResult::with_events(
                fetch_task(state),
                vec![CrossDomainEvent::UserSaved(user_id)],
            )
        }
        Err(err) => {
            error!("[UserUpdate] Update failed: {}", err);
            domain.notices.notify(Notice::error(err));
            DomainUpdateResult::none()
        }
    }
}

fn handle_cancel(state: &mut State) -> DomainUpdateResult {
    let editor = &mut state.domains.user_update.state;
    if !editor.is_usable() {
        return DomainUpdateResult::none();
    }
    info!("[UserUpdate] Discarding edits");
    editor
        .store
        .reset_from(editor.snapshot.as_ref(), &editor.languages);
    editor.avatar_input.cancel();
    DomainUpdateResult::none()
}
