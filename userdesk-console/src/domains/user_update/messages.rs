//! Profile editor messages

use std::path::PathBuf;

use userdesk_contracts::UpdateUserAck;
use userdesk_model::{AvatarFile, LanguageCode, UserRole, UserSnapshot};

#[derive(Debug, Clone)]
pub enum UserUpdateMessage {
    /// Screen mounted; issues the detail fetch once
    Activate,
    /// Detail fetch finished. `Ok(None)` means no such user
    UserLoaded(Result<Option<UserSnapshot>, String>),

    // Free-text fields
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),

    // Constrained inputs
    RoleSelected(UserRole),
    LanguageSelected(LanguageCode),

    // Avatar
    AvatarPathChanged(String),
    /// Read the file named in the path input
    AttachAvatar,
    /// A file was dropped onto the window
    AvatarDropped(PathBuf),
    /// Result of the read started under the given ticket
    AvatarRead(u64, Result<AvatarFile, String>),

    /// Package the draft and dispatch it
    Submit,
    SubmitCompleted(Result<UpdateUserAck, String>),
    /// Discard edits and re-project the last snapshot
    Cancel,
}

impl UserUpdateMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activate => "UserUpdate::Activate",
            Self::UserLoaded(_) => "UserUpdate::UserLoaded",
            Self::FirstNameChanged(_) => "UserUpdate::FirstNameChanged",
            Self::LastNameChanged(_) => "UserUpdate::LastNameChanged",
            Self::EmailChanged(_) => "UserUpdate::EmailChanged",
            Self::RoleSelected(_) => "UserUpdate::RoleSelected",
            Self::LanguageSelected(_) => "UserUpdate::LanguageSelected",
            Self::AvatarPathChanged(_) => "UserUpdate::AvatarPathChanged",
            Self::AttachAvatar => "UserUpdate::AttachAvatar",
            Self::AvatarDropped(_) => "UserUpdate::AvatarDropped",
            Self::AvatarRead(..) => "UserUpdate::AvatarRead",
            Self::Submit => "UserUpdate::Submit",
            Self::SubmitCompleted(_) => "UserUpdate::SubmitCompleted",
            Self::Cancel => "UserUpdate::Cancel",
        }
    }
}
