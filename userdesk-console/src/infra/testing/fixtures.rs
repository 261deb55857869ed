use chrono::DateTime;
use userdesk_model::{EntityRef, UserID, UserRole, UserSnapshot};

pub const DEMO_USER_ID: &str = "1";

pub fn demo_user_id() -> UserID {
    UserID::new(DEMO_USER_ID).expect("demo user id is non-blank")
}

/// A superadmin who belongs to one organization and speaks English.
pub fn superadmin_snapshot() -> UserSnapshot {
    UserSnapshot {
        image: None,
        first_name: "Aditya".into(),
        last_name: "Agarwal".into(),
        email: "adi790u@gmail.com".into(),
        role: UserRole::SuperAdmin,
        app_language_code: "en".into(),
        user_type: Some("SUPERADMIN".into()),
        plugin_creation_allowed: true,
        admin_approved: true,
        created_at: DateTime::from_timestamp_millis(1_676_712_147_969)
            .unwrap_or_default(),
        admin_for: vec![EntityRef {
            id: "63f0bb287bfc2a0a0c5a1bd6".into(),
            name: None,
        }],
        created_organizations: Vec::new(),
        joined_organizations: vec![EntityRef {
            id: "63f0bb287bfc2a0a0c5a1bd6".into(),
            name: Some("Palisadoes Foundation".into()),
        }],
        organization_user_belongs_to: None,
        organizations_blocked_by: Vec::new(),
        created_events: Vec::new(),
        registered_events: Vec::new(),
        event_admin: Vec::new(),
        membership_requests: Vec::new(),
    }
}

/// Same user with an app language outside the default supported set.
pub fn snapshot_with_language(code: &str) -> UserSnapshot {
    UserSnapshot {
        app_language_code: code.into(),
        ..superadmin_snapshot()
    }
}

/// Superadmin record with blank name and email fields.
pub fn empty_superadmin_snapshot() -> UserSnapshot {
    UserSnapshot {
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        ..superadmin_snapshot()
    }
}
