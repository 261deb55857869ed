use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Identifier of the user record being edited.
///
/// The remote directory hands out opaque string ids, so this wraps a
/// `String` rather than a `Uuid`. Construction rejects blank ids; whether the
/// id names an existing record is the directory's concern.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserID(String);

impl UserID {
    pub fn new(id: impl Into<String>) -> Result<Self, ModelError> {
        let id = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidUserId(
                "User ID cannot be empty".to_string(),
            ));
        }
        Ok(UserID(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for UserID {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserID::new(s)
    }
}

impl std::fmt::Display for UserID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
