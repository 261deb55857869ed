//! Role classes an operator can assign, and the tri-state radio selection.

use serde::{Deserialize, Serialize};

/// Role class of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "ADMIN")]
    Admin,
    #[serde(rename = "SUPERADMIN")]
    SuperAdmin,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [Self::Admin, Self::SuperAdmin];

    /// Value used on the wire.
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::SuperAdmin => "SUPERADMIN",
        }
    }

    /// Label shown next to the radio option.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::SuperAdmin => "Superadmin",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Selection state of the two mutually exclusive role radios.
///
/// `Unset` renders both options unchecked. Once an option has been chosen
/// there is no way back to `Unset` through [`RoleSelection::select`], so
/// exactly one option stays checked after the first interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoleSelection {
    #[default]
    Unset,
    Chosen(UserRole),
}

impl RoleSelection {
    pub fn select(&mut self, role: UserRole) {
        *self = RoleSelection::Chosen(role);
    }

    pub fn current(&self) -> Option<UserRole> {
        match self {
            RoleSelection::Unset => None,
            RoleSelection::Chosen(role) => Some(*role),
        }
    }

    pub fn is_checked(&self, role: UserRole) -> bool {
        self.current() == Some(role)
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, RoleSelection::Unset)
    }
}

impl From<UserRole> for RoleSelection {
    fn from(role: UserRole) -> Self {
        RoleSelection::Chosen(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_count(selection: &RoleSelection) -> usize {
        UserRole::ALL
            .iter()
            .filter(|role| selection.is_checked(**role))
            .count()
    }

    #[test]
    fn starts_with_both_options_unchecked() {
        let selection = RoleSelection::default();
        assert!(selection.is_unset());
        assert_eq!(checked_count(&selection), 0);
    }

    #[test]
    fn toggling_keeps_exactly_one_checked() {
        let mut selection = RoleSelection::default();

        selection.select(UserRole::Admin);
        assert!(selection.is_checked(UserRole::Admin));
        assert!(!selection.is_checked(UserRole::SuperAdmin));
        assert_eq!(checked_count(&selection), 1);

        selection.select(UserRole::SuperAdmin);
        assert!(selection.is_checked(UserRole::SuperAdmin));
        assert!(!selection.is_checked(UserRole::Admin));
        assert_eq!(checked_count(&selection), 1);

        selection.select(UserRole::SuperAdmin);
        assert_eq!(checked_count(&selection), 1);
    }

    #[test]
    fn wire_names_match_directory_enum() {
        assert_eq!(
            serde_json::to_string(&UserRole::SuperAdmin).unwrap(),
            "\"SUPERADMIN\""
        );
        let role: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
