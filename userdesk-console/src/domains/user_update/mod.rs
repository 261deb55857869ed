//! Profile editor domain
//!
//! Loads one user's details, keeps the editable draft, and dispatches the
//! update when the operator saves.

pub mod messages;
pub mod state;
pub mod tasks;
pub mod update;
pub mod view;

use std::sync::Arc;

use userdesk_model::{SupportedLanguages, UserID};

use self::state::UserUpdateState;
use crate::infra::services::{NoticeSink, UserDirectory};

pub use messages::UserUpdateMessage;
pub use update::update_user_update;

pub struct UserUpdateDomain {
    pub state: UserUpdateState,
    pub directory: Arc<dyn UserDirectory>,
    pub notices: Arc<dyn NoticeSink>,
}

impl UserUpdateDomain {
    pub fn new(
        user_id: UserID,
        languages: SupportedLanguages,
        directory: Arc<dyn UserDirectory>,
        notices: Arc<dyn NoticeSink>,
    ) -> Self {
        Self {
            state: UserUpdateState::new(user_id, languages),
            directory,
            notices,
        }
    }
}

impl std::fmt::Debug for UserUpdateDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserUpdateDomain")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
