use std::{collections::HashMap, sync::Arc};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use parking_lot::RwLock;
use userdesk_contracts::{UpdateUserAck, UpdateUserRequest, avatar_data_url};
use userdesk_model::{UserID, UserSnapshot};

use crate::infra::services::user_directory::UserDirectory;
use crate::infra::testing::fixtures;

/// In-memory user directory.
///
/// Accepted updates are applied to the stored snapshot so a follow-up fetch
/// observes them, the way the real directory behaves.
#[derive(Debug, Clone)]
pub struct StubUserDirectory {
    inner: Arc<RwLock<InnerDirectoryState>>,
}

#[derive(Debug, Default)]
struct InnerDirectoryState {
    users: HashMap<UserID, UserSnapshot>,
    fail_fetches: bool,
    fail_updates: bool,
    fetch_calls: Vec<UserID>,
    updates: Vec<UpdateUserRequest>,
}

impl Default for StubUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl StubUserDirectory {
    /// Empty directory. Every fetch resolves to "no such user".
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(InnerDirectoryState::default())),
        }
    }

    /// Directory pre-populated with the demo user used by the console's
    /// stub mode.
    pub fn seeded_demo() -> Self {
        Self::new().with_user(fixtures::demo_user_id(), fixtures::superadmin_snapshot())
    }

    pub fn with_user(self, id: UserID, snapshot: UserSnapshot) -> Self {
        self.inner.write().users.insert(id, snapshot);
        self
    }

    pub fn fail_fetches(&self, fail: bool) {
        self.inner.write().fail_fetches = fail;
    }

    pub fn fail_updates(&self, fail: bool) {
        self.inner.write().fail_updates = fail;
    }

    pub fn clear_failures(&self) {
        let mut guard = self.inner.write();
        guard.fail_fetches = false;
        guard.fail_updates = false;
    }

    /// Ids passed to `fetch_user`, in call order.
    pub fn fetch_calls(&self) -> Vec<UserID> {
        self.inner.read().fetch_calls.clone()
    }

    /// Update requests received, including rejected ones.
    pub fn updates(&self) -> Vec<UpdateUserRequest> {
        self.inner.read().updates.clone()
    }

    pub fn user(&self, id: &UserID) -> Option<UserSnapshot> {
        self.inner.read().users.get(id).cloned()
    }
}

#[async_trait]
impl UserDirectory for StubUserDirectory {
    async fn fetch_user(&self, id: &UserID) -> Result<Option<UserSnapshot>> {
        let mut guard = self.inner.write();
        guard.fetch_calls.push(id.clone());
        if guard.fail_fetches {
            return Err(anyhow!("stub directory unreachable"));
        }
        Ok(guard.users.get(id).cloned())
    }

    async fn update_user(&self, req: UpdateUserRequest) -> Result<UpdateUserAck> {
        let mut guard = self.inner.write();
        guard.updates.push(req.clone());
        if guard.fail_updates {
            return Err(anyhow!("stub directory rejected the update"));
        }

        let snapshot = guard
            .users
            .get_mut(&req.id)
            .ok_or_else(|| anyhow!("user {} not found", req.id))?;
        snapshot.first_name = req.first_name.clone();
        snapshot.last_name = req.last_name.clone();
        snapshot.email = req.email.clone();
        snapshot.role = req.role;
        snapshot.app_language_code = req.app_language_code.as_str().to_string();
        if let Some(avatar) = &req.avatar {
            snapshot.image = Some(avatar_data_url(avatar));
        }

        Ok(UpdateUserAck {
            id: Some(req.id.as_str().to_string()),
        })
    }
}
