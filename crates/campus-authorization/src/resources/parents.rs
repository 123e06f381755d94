//! Parent (guardian contact) records
//!
//! Principals and office staff maintain parent records; teachers may look
//! them up; a guardian may read and correct only the record it owns.

use crate::policy::predicates::{owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on parent records
    pub enum ParentAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        BulkAction => "bulk_action",
        /// Attach a student to the parent
        LinkStudent => "link_student",
        /// Detach a student from the parent
        UnlinkStudent => "unlink_student",
    }
}

const RULES: &[Rule<ParentAction>] = &[
    Rule::role(Role::Principal, &[ParentAction::Create], within_school),
    Rule::role(
        Role::Principal,
        &[
            ParentAction::Read,
            ParentAction::Update,
            ParentAction::Export,
            ParentAction::LinkStudent,
            ParentAction::UnlinkStudent,
        ],
        same_school,
    ),
    Rule::role(Role::Staff, &[ParentAction::Create], within_school),
    Rule::role(
        Role::Staff,
        &[ParentAction::Read, ParentAction::Update, ParentAction::LinkStudent],
        same_school,
    ),
    Rule::role(
        Role::Teacher,
        &[ParentAction::Read, ParentAction::Export],
        same_school,
    ),
    Rule::role(
        Role::Guardian,
        &[ParentAction::Read, ParentAction::Update],
        owned_by_caller,
    ),
];

/// Policy for parent records
pub static PARENT_POLICY: ResourcePolicy<ParentAction> = ResourcePolicy::new("parent", RULES);

/// Whether `auth` may perform `action` on a parent record
pub fn check_permission(
    auth: &AuthContext,
    action: ParentAction,
    resource: Option<&ResourceContext>,
) -> bool {
    PARENT_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: ParentAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    PARENT_POLICY.assert(auth, action, resource)
}

/// Whether the role may add parent records
pub fn can_create_parent(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Staff
    )
}

/// Whether the role may export parent records
pub fn can_export_parents(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may delete parent records
pub fn can_delete_parent(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parent_in(school: &str) -> ResourceContext {
        ResourceContext::in_school(school).with_id("p1")
    }

    #[test]
    fn test_guardian_self_service() {
        let auth = AuthContext::new("G1", Role::Guardian, "S1");
        let own = parent_in("S1").with_owner("G1");
        let other = parent_in("S1").with_owner("G2");

        assert!(check_permission(&auth, ParentAction::Update, Some(&own)));
        assert!(check_permission(&auth, ParentAction::Read, Some(&own)));
        assert!(!check_permission(&auth, ParentAction::Update, Some(&other)));
        assert!(!check_permission(&auth, ParentAction::Delete, Some(&own)));
        assert!(!check_permission(&auth, ParentAction::Create, None));
    }

    #[test]
    fn test_staff_links_but_cannot_unlink() {
        let auth = AuthContext::new("U1", Role::Staff, "S1");
        let parent = parent_in("S1");
        assert!(check_permission(&auth, ParentAction::LinkStudent, Some(&parent)));
        assert!(!check_permission(&auth, ParentAction::UnlinkStudent, Some(&parent)));
        assert!(!check_permission(&auth, ParentAction::Export, Some(&parent)));
        assert!(check_permission(&auth, ParentAction::Create, None));
    }

    #[test]
    fn test_principal_is_confined_to_school() {
        let auth = AuthContext::new("P1", Role::Principal, "S1");
        assert!(check_permission(&auth, ParentAction::UnlinkStudent, Some(&parent_in("S1"))));
        assert!(!check_permission(&auth, ParentAction::Read, Some(&parent_in("S2"))));
        assert!(!check_permission(&auth, ParentAction::BulkAction, Some(&parent_in("S1"))));
    }

    #[test]
    fn test_assert_names_the_record() {
        let auth = AuthContext::new("T1", Role::Teacher, "S1");
        let err = assert_permission(&auth, ParentAction::Update, Some(&parent_in("S1"))).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: TEACHER cannot update parent p1");
    }

    #[test]
    fn test_action_names() {
        assert_eq!("link_student".parse::<ParentAction>().unwrap(), ParentAction::LinkStudent);
        assert_eq!(ParentAction::BulkAction.to_string(), "bulk_action");
        assert!("promote".parse::<ParentAction>().is_err());
    }
}
