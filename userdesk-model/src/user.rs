//! Read-only user record as returned by the directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::role::UserRole;

/// Reference to a related record (organization, event, membership request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, alias = "title", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Immutable snapshot of a user, used to seed the editable draft.
///
/// Besides the editable attributes it carries metadata the editor never
/// changes but must keep intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSnapshot {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub app_language_code: String,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub plugin_creation_allowed: bool,
    #[serde(default)]
    pub admin_approved: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub admin_for: Vec<EntityRef>,
    #[serde(default)]
    pub created_organizations: Vec<EntityRef>,
    #[serde(default)]
    pub joined_organizations: Vec<EntityRef>,
    #[serde(default)]
    pub organization_user_belongs_to: Option<EntityRef>,
    #[serde(default)]
    pub organizations_blocked_by: Vec<EntityRef>,
    #[serde(default)]
    pub created_events: Vec<EntityRef>,
    #[serde(default)]
    pub registered_events: Vec<EntityRef>,
    #[serde(default)]
    pub event_admin: Vec<EntityRef>,
    #[serde(default)]
    pub membership_requests: Vec<EntityRef>,
}

impl UserSnapshot {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}
