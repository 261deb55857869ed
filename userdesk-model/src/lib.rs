//! Core data model definitions shared across userdesk crates.
#![allow(missing_docs)]

pub mod avatar;
pub mod draft;
pub mod error;
pub mod ids;
pub mod language;
pub mod prelude;
pub mod role;
pub mod user;

pub use avatar::AvatarFile;
pub use draft::{DraftError, UserDraft};
pub use error::{ModelError, Result as ModelResult};
pub use ids::UserID;
pub use language::{LanguageCode, SupportedLanguages};
pub use role::{RoleSelection, UserRole};
pub use user::{EntityRef, UserSnapshot};
