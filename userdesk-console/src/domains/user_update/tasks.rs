//! Async work started by the profile editor.
//!
//! Each function folds its error into a `String` so the result can travel
//! inside a `Clone` message.

use std::path::PathBuf;
use std::sync::Arc;

use log::{info, warn};
use userdesk_contracts::{UpdateUserAck, UpdateUserRequest};
use userdesk_model::{AvatarFile, UserID, UserSnapshot};

use crate::infra::avatar;
use crate::infra::services::UserDirectory;

pub async fn load_user(
    directory: Arc<dyn UserDirectory>,
    id: UserID,
) -> Result<Option<UserSnapshot>, String> {
    match directory.fetch_user(&id).await {
        Ok(found) => Ok(found),
        Err(err) => {
            warn!("[UserUpdate] Fetch for {} failed: {:#}", id, err);
            Err(err.to_string())
        }
    }
}

pub async fn dispatch_update(
    directory: Arc<dyn UserDirectory>,
    request: UpdateUserRequest,
) -> Result<UpdateUserAck, String> {
    info!(
        "[UserUpdate] Dispatching update for {} (avatar: {})",
        request.id,
        request.avatar.is_some()
    );
    directory
        .update_user(request)
        .await
        .map_err(|err| format!("{err:#}"))
}

pub async fn read_avatar(path: PathBuf) -> Result<AvatarFile, String> {
    avatar::read_avatar(&path).await.map_err(|err| err.to_string())
}
