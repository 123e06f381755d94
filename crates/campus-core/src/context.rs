//! Request-scoped authorization inputs
//!
//! [`AuthContext`] describes who is acting; [`ResourceContext`] is the minimal
//! projection of the record being acted on. Both are built fresh for each
//! request and never shared or cached across requests.

use crate::identifiers::{ResourceId, SchoolId, UserId};
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Authenticated actor for one request
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthContext {
    /// Account performing the request
    pub user_id: UserId,
    /// The actor's single role
    pub role: Role,
    /// Tenant binding; `None` means the actor is bound to no school
    pub school_id: Option<SchoolId>,
}

impl AuthContext {
    /// Create a context bound to a school
    pub fn new(user_id: impl Into<UserId>, role: Role, school_id: impl Into<SchoolId>) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            school_id: Some(school_id.into()),
        }
    }

    /// Create a context with no tenant binding
    pub fn unbound(user_id: impl Into<UserId>, role: Role) -> Self {
        Self {
            user_id: user_id.into(),
            role,
            school_id: None,
        }
    }

    /// Whether the actor belongs to the given school
    pub fn belongs_to(&self, school_id: &SchoolId) -> bool {
        self.school_id.as_ref() == Some(school_id)
    }
}

/// Minimal projection of a protected record
///
/// `id` is absent when checking a creation, which has no record yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContext {
    /// Record identifier
    #[serde(default)]
    pub id: Option<ResourceId>,
    /// Owning tenant
    #[serde(default, alias = "school_id")]
    pub school_id: Option<SchoolId>,
    /// Account that owns the record for self-service actions
    #[serde(default, alias = "owner_user_id", alias = "userId", alias = "user_id")]
    pub owner_user_id: Option<UserId>,
    /// Accounts related to the record without owning it, e.g. a student's guardians
    #[serde(default, alias = "linked_user_ids", skip_serializing_if = "Vec::is_empty")]
    pub linked_user_ids: Vec<UserId>,
}

impl ResourceContext {
    /// Empty context, equivalent to a record that does not exist yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a record in a school
    pub fn in_school(school_id: impl Into<SchoolId>) -> Self {
        Self::new().with_school(school_id)
    }

    /// Set the record identifier
    pub fn with_id(mut self, id: impl Into<ResourceId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the owning tenant
    pub fn with_school(mut self, school_id: impl Into<SchoolId>) -> Self {
        self.school_id = Some(school_id.into());
        self
    }

    /// Set the owning account
    pub fn with_owner(mut self, owner: impl Into<UserId>) -> Self {
        self.owner_user_id = Some(owner.into());
        self
    }

    /// Add a linked account
    pub fn with_linked(mut self, user: impl Into<UserId>) -> Self {
        self.linked_user_ids.push(user.into());
        self
    }

    /// Whether the given account is linked to this record
    pub fn is_linked(&self, user: &UserId) -> bool {
        self.linked_user_ids.contains(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_context_builders() {
        let ctx = ResourceContext::in_school("S1")
            .with_id("r1")
            .with_owner("U1")
            .with_linked("G1");

        assert_eq!(ctx.id, Some(ResourceId::from("r1")));
        assert_eq!(ctx.school_id, Some(SchoolId::from("S1")));
        assert_eq!(ctx.owner_user_id, Some(UserId::from("U1")));
        assert!(ctx.is_linked(&UserId::from("G1")));
        assert!(!ctx.is_linked(&UserId::from("U1")));
    }

    #[test]
    fn test_resource_context_accepts_record_field_names() {
        let ctx: ResourceContext =
            serde_json::from_str(r#"{"id":"p1","schoolId":"S1","userId":"U1"}"#).unwrap();
        assert_eq!(ctx.owner_user_id, Some(UserId::from("U1")));

        let ctx: ResourceContext =
            serde_json::from_str(r#"{"school_id":"S2","linked_user_ids":["G1"]}"#).unwrap();
        assert_eq!(ctx.school_id, Some(SchoolId::from("S2")));
        assert_eq!(ctx.linked_user_ids, vec![UserId::from("G1")]);
    }

    #[test]
    fn test_unbound_context_belongs_nowhere() {
        let auth = AuthContext::unbound("U1", Role::Teacher);
        assert!(!auth.belongs_to(&SchoolId::from("S1")));
        assert!(AuthContext::new("U1", Role::Teacher, "S1").belongs_to(&SchoolId::from("S1")));
    }
}
