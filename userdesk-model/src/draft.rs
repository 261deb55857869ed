//! Locally editable copy of a user's attributes.

use std::fmt::{self, Display};

use crate::avatar::AvatarFile;
use crate::ids::UserID;
use crate::language::{LanguageCode, SupportedLanguages};
use crate::role::{RoleSelection, UserRole};
use crate::user::UserSnapshot;

/// Reasons a draft cannot be changed or turned into an update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    UnsupportedLanguage(String),
    RoleUnset,
    LanguageUnset,
}

impl Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::UnsupportedLanguage(code) => {
                write!(f, "language '{code}' is not supported")
            }
            DraftError::RoleUnset => write!(f, "select a user type first"),
            DraftError::LanguageUnset => write!(f, "select a language first"),
        }
    }
}

impl std::error::Error for DraftError {}

/// The editable attributes of one user record.
///
/// `id` is fixed at construction; everything else is plain data that the
/// editor mutates field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    id: UserID,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub avatar: Option<AvatarFile>,
    pub role: RoleSelection,
    pub language: Option<LanguageCode>,
}

impl UserDraft {
    /// Blank draft used before the snapshot arrives.
    pub fn empty(id: UserID) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            avatar: None,
            role: RoleSelection::Unset,
            language: None,
        }
    }

    /// Project the editable fields of `snapshot` into a fresh draft.
    ///
    /// A snapshot language outside `languages` is left unselected, since the
    /// selector can only ever hold members of the supported set.
    pub fn from_snapshot(
        id: UserID,
        snapshot: &UserSnapshot,
        languages: &SupportedLanguages,
    ) -> Self {
        Self {
            id,
            first_name: snapshot.first_name.clone(),
            last_name: snapshot.last_name.clone(),
            email: snapshot.email.clone(),
            avatar: None,
            role: RoleSelection::Chosen(snapshot.role),
            language: languages.resolve(&snapshot.app_language_code).cloned(),
        }
    }

    pub fn id(&self) -> &UserID {
        &self.id
    }

    /// The role and language a complete request needs.
    pub fn required_choices(
        &self,
    ) -> Result<(UserRole, &LanguageCode), DraftError> {
        let role = self.role.current().ok_or(DraftError::RoleUnset)?;
        let language = self.language.as_ref().ok_or(DraftError::LanguageUnset)?;
        Ok((role, language))
    }
}
