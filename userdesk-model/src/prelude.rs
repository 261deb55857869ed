//! Convenience re-exports for downstream crates.

pub use crate::avatar::AvatarFile;
pub use crate::draft::{DraftError, UserDraft};
pub use crate::ids::UserID;
pub use crate::language::{LanguageCode, SupportedLanguages};
pub use crate::role::{RoleSelection, UserRole};
pub use crate::user::{EntityRef, UserSnapshot};
