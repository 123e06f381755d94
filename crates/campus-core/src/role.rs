//! Actor roles
//!
//! One role per authenticated actor; roles never compose. A role string that
//! is not part of the enumeration resolves to [`Role::Unrecognized`], which no
//! rule or permission mentions, so it is denied everywhere instead of failing
//! session resolution.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed enumeration of actor kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Global super-role, exempt from tenant and ownership checks
    Developer,
    /// School administrator, full control inside one tenant
    Admin,
    /// Head of school
    Principal,
    /// Teaching staff
    Teacher,
    /// Non-teaching staff (front office, operations)
    Staff,
    /// Finance staff
    Accountant,
    /// Library staff
    Librarian,
    /// Parent or guardian account
    Guardian,
    /// Student account
    Student,
    /// Any role string outside the enumeration
    #[serde(other)]
    Unrecognized,
}

impl Role {
    /// Every role, in declaration order
    pub const ALL: [Role; 10] = [
        Role::Developer,
        Role::Admin,
        Role::Principal,
        Role::Teacher,
        Role::Staff,
        Role::Accountant,
        Role::Librarian,
        Role::Guardian,
        Role::Student,
        Role::Unrecognized,
    ];

    /// Wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Developer => "DEVELOPER",
            Role::Admin => "ADMIN",
            Role::Principal => "PRINCIPAL",
            Role::Teacher => "TEACHER",
            Role::Staff => "STAFF",
            Role::Accountant => "ACCOUNTANT",
            Role::Librarian => "LIBRARIAN",
            Role::Guardian => "GUARDIAN",
            Role::Student => "STUDENT",
            Role::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Resolve a role string, mapping unknown names to `Unrecognized`
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or(Role::Unrecognized)
    }

    /// Whether this is the global override role
    pub fn is_global(&self) -> bool {
        matches!(self, Role::Developer)
    }

    /// Whether this is the per-tenant administrator role
    pub fn is_tenant_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a role name is not part of the enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Role::ALL
            .iter()
            .copied()
            .filter(|role| *role != Role::Unrecognized)
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("teacher".parse::<Role>(), Ok(Role::Teacher));
        assert_eq!(" ACCOUNTANT ".parse::<Role>(), Ok(Role::Accountant));
    }

    #[test]
    fn test_unknown_role_is_rejected_or_unrecognized() {
        assert!("JANITOR".parse::<Role>().is_err());
        assert!("UNRECOGNIZED".parse::<Role>().is_err());
        assert_eq!(Role::parse_lenient("JANITOR"), Role::Unrecognized);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Role::Guardian).unwrap(), "\"GUARDIAN\"");
        let role: Role = serde_json::from_str("\"PRINCIPAL\"").unwrap();
        assert_eq!(role, Role::Principal);
        let other: Role = serde_json::from_str("\"SUPERHERO\"").unwrap();
        assert_eq!(other, Role::Unrecognized);
    }

    #[test]
    fn test_only_developer_is_global() {
        let globals: Vec<_> = Role::ALL.iter().filter(|r| r.is_global()).collect();
        assert_eq!(globals, vec![&Role::Developer]);
    }
}
