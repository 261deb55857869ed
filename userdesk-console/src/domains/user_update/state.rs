//! Profile editor state

use userdesk_contracts::UpdateUserRequest;
use userdesk_model::{
    AvatarFile, DraftError, LanguageCode, RoleSelection, SupportedLanguages,
    UserDraft, UserID, UserRole, UserSnapshot,
};

/// Where the detail fetch stands for this mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Not activated yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Fetch failed or the user does not exist. Terminal for this mount.
    Unavailable,
}

/// What happened when a snapshot was offered to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded,
    /// The operator had already edited a field; the draft was left alone.
    KeptOperatorEdits,
}

/// Mutable draft behind the form.
///
/// Every setter touches only its own field and marks the store dirty. A
/// dirty store refuses to be overwritten by [`FieldStore::seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldStore {
    draft: UserDraft,
    dirty: bool,
}

impl FieldStore {
    pub fn new(id: UserID) -> Self {
        Self {
            draft: UserDraft::empty(id),
            dirty: false,
        }
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn first_name(&self) -> &str {
        &self.draft.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.draft.last_name
    }

    pub fn email(&self) -> &str {
        &self.draft.email
    }

    pub fn role(&self) -> RoleSelection {
        self.draft.role
    }

    pub fn language(&self) -> Option<&LanguageCode> {
        self.draft.language.as_ref()
    }

    pub fn avatar(&self) -> Option<&AvatarFile> {
        self.draft.avatar.as_ref()
    }

    pub fn set_first_name(&mut self, value: String) {
        self.draft.first_name = value;
        self.dirty = true;
    }

    pub fn set_last_name(&mut self, value: String) {
        self.draft.last_name = value;
        self.dirty = true;
    }

    pub fn set_email(&mut self, value: String) {
        self.draft.email = value;
        self.dirty = true;
    }

    pub fn select_role(&mut self, role: UserRole) {
        self.draft.role.select(role);
        self.dirty = true;
    }

    /// Write `code` if it belongs to `languages`. Otherwise nothing changes.
    pub fn select_language(
        &mut self,
        languages: &SupportedLanguages,
        code: &str,
    ) -> Result<(), DraftError> {
        let resolved = languages
            .resolve(code)
            .ok_or_else(|| DraftError::UnsupportedLanguage(code.to_string()))?;
        self.draft.language = Some(resolved.clone());
        self.dirty = true;
        Ok(())
    }

    /// Replace any previously staged avatar.
    pub fn stage_avatar(&mut self, avatar: AvatarFile) {
        self.draft.avatar = Some(avatar);
        self.dirty = true;
    }

    /// Project `snapshot` into the draft unless the operator got there first.
    pub fn seed(
        &mut self,
        snapshot: &UserSnapshot,
        languages: &SupportedLanguages,
    ) -> SeedOutcome {
        if self.dirty {
            return SeedOutcome::KeptOperatorEdits;
        }
        self.draft =
            UserDraft::from_snapshot(self.draft.id().clone(), snapshot, languages);
        SeedOutcome::Seeded
    }

    /// Drop all edits. Falls back to an empty draft when nothing was loaded.
    pub fn reset_from(
        &mut self,
        snapshot: Option<&UserSnapshot>,
        languages: &SupportedLanguages,
    ) {
        let id = self.draft.id().clone();
        self.draft = match snapshot {
            Some(snapshot) => UserDraft::from_snapshot(id, snapshot, languages),
            None => UserDraft::empty(id),
        };
        self.dirty = false;
    }

    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

/// Path text box next to the Attach button.
///
/// Each file read is tagged with a ticket. Only the result carrying the
/// `pending` ticket is accepted; anything older was superseded or cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvatarInput {
    pub path: String,
    pub pending: Option<u64>,
    reads_started: u64,
}

impl AvatarInput {
    /// A read is in flight
    pub fn reading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a read, superseding any earlier one.
    pub fn begin_read(&mut self) -> u64 {
        self.reads_started += 1;
        self.pending = Some(self.reads_started);
        self.reads_started
    }

    /// Settle `ticket`. False when it is not the read being waited on.
    pub fn finish_read(&mut self, ticket: u64) -> bool {
        if self.pending != Some(ticket) {
            return false;
        }
        self.pending = None;
        true
    }

    /// Clear the path and forget the pending read.
    pub fn cancel(&mut self) {
        self.path.clear();
        self.pending = None;
    }
}

#[derive(Debug, Clone)]
pub struct UserUpdateState {
    pub user_id: UserID,
    pub languages: SupportedLanguages,
    pub phase: LoadPhase,
    /// Fetches issued on this mount, including the refetch after a save
    pub fetches_issued: usize,
    /// Last snapshot received from the directory
    pub snapshot: Option<UserSnapshot>,
    pub store: FieldStore,
    pub avatar_input: AvatarInput,
    /// Request currently being dispatched. Doubles as the double-submit guard.
    pub in_flight: Option<UpdateUserRequest>,
}

impl UserUpdateState {
    pub fn new(user_id: UserID, languages: SupportedLanguages) -> Self {
        Self {
            store: FieldStore::new(user_id.clone()),
            user_id,
            languages,
            phase: LoadPhase::Idle,
            fetches_issued: 0,
            snapshot: None,
            avatar_input: AvatarInput::default(),
            in_flight: None,
        }
    }

    pub fn submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Inputs accept edits
    pub fn is_usable(&self) -> bool {
        self.phase != LoadPhase::Unavailable
    }

    pub fn can_submit(&self) -> bool {
        self.phase == LoadPhase::Ready && !self.submitting()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::testing::fixtures;

    fn languages() -> SupportedLanguages {
        SupportedLanguages::new(["en", "fr", "hi", "sp", "zh"]).unwrap()
    }

    fn store() -> FieldStore {
        FieldStore::new(UserID::new("1").unwrap())
    }

    #[test]
    fn seed_projects_editable_fields() {
        let mut store = store();
        let snapshot = fixtures::superadmin_snapshot();

        assert_eq!(store.seed(&snapshot, &languages()), SeedOutcome::Seeded);
        assert_eq!(store.first_name(), snapshot.first_name);
        assert_eq!(store.last_name(), snapshot.last_name);
        assert_eq!(store.email(), snapshot.email);
        assert!(store.role().is_checked(UserRole::SuperAdmin));
        assert_eq!(store.language().map(LanguageCode::as_str), Some("en"));
        assert!(store.avatar().is_none());
        assert!(!store.is_dirty());
    }

    #[test]
    fn seed_after_edit_keeps_operator_values() {
        let mut store = store();
        store.set_first_name("Sumit".into());

        let outcome = store.seed(&fixtures::superadmin_snapshot(), &languages());
        assert_eq!(outcome, SeedOutcome::KeptOperatorEdits);
        assert_eq!(store.first_name(), "Sumit");
        assert!(store.role().is_unset());
    }

    #[test]
    fn setters_only_touch_their_own_field() {
        let mut store = store();
        store.seed(&fixtures::superadmin_snapshot(), &languages());

        store.set_email("sumit@gmail.com".into());
        assert_eq!(store.email(), "sumit@gmail.com");
        assert_eq!(store.first_name(), "Aditya");
        assert_eq!(store.last_name(), "Agarwal");
        assert!(store.role().is_checked(UserRole::SuperAdmin));
        assert!(store.is_dirty());
    }

    #[test]
    fn unsupported_language_is_rejected_without_change() {
        let mut store = store();
        store.select_language(&languages(), "fr").unwrap();

        let err = store.select_language(&languages(), "de").unwrap_err();
        assert_eq!(err, DraftError::UnsupportedLanguage("de".into()));
        assert_eq!(store.language().map(LanguageCode::as_str), Some("fr"));
    }

    #[test]
    fn staging_an_avatar_replaces_the_previous_one() {
        let mut store = store();
        store.stage_avatar(AvatarFile::new("a.png", "image/png", vec![1u8]));
        store.stage_avatar(AvatarFile::new("b.jpg", "image/jpeg", vec![2u8, 3]));

        let avatar = store.avatar().unwrap();
        assert_eq!(avatar.file_name(), "b.jpg");
        assert_eq!(avatar.bytes(), &[2, 3]);
    }

    #[test]
    fn reset_without_snapshot_returns_to_empty_draft() {
        let mut store = store();
        store.set_last_name("Maithani".into());
        store.select_role(UserRole::Admin);

        store.reset_from(None, &languages());
        assert_eq!(store.draft(), &UserDraft::empty(UserID::new("1").unwrap()));
        assert!(!store.is_dirty());
    }

    #[test]
    fn submit_is_gated_on_phase_and_in_flight_request() {
        let mut state = UserUpdateState::new(UserID::new("1").unwrap(), languages());
        assert!(!state.can_submit());

        state.phase = LoadPhase::Ready;
        assert!(state.can_submit());

        state.store.select_role(UserRole::Admin);
        state.store.select_language(&languages(), "en").unwrap();
        state.in_flight = UpdateUserRequest::from_draft(state.store.draft()).ok();
        assert!(state.submitting());
        assert!(!state.can_submit());
    }

    #[test]
    fn only_the_latest_avatar_read_settles() {
        let mut input = AvatarInput::default();
        let first = input.begin_read();
        let second = input.begin_read();

        assert!(!input.finish_read(first));
        assert!(input.reading());
        assert!(input.finish_read(second));
        assert!(!input.reading());
    }

    #[test]
    fn cancelled_read_is_never_settled() {
        let mut input = AvatarInput::default();
        input.path = "/tmp/me.png".into();
        let ticket = input.begin_read();

        input.cancel();
        assert!(input.path.is_empty());
        assert!(!input.finish_read(ticket));

        assert_ne!(input.begin_read(), ticket);
    }
}
