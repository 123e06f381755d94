//! Staff member records

use crate::policy::predicates::{owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on staff records
    pub enum StaffAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        BulkAction => "bulk_action",
        AssignRole => "assign_role",
        Deactivate => "deactivate",
    }
}

const SELF_SERVICE: &[StaffAction] = &[StaffAction::Read, StaffAction::Update];

const RULES: &[Rule<StaffAction>] = &[
    Rule::role(Role::Principal, &[StaffAction::Create], within_school),
    Rule::role(
        Role::Principal,
        &[
            StaffAction::Read,
            StaffAction::Update,
            StaffAction::Export,
            StaffAction::Deactivate,
        ],
        same_school,
    ),
    Rule::role(
        Role::Accountant,
        &[StaffAction::Read, StaffAction::Export],
        same_school,
    ),
    Rule::role(Role::Staff, SELF_SERVICE, owned_by_caller),
    Rule::role(Role::Teacher, SELF_SERVICE, owned_by_caller),
    Rule::role(Role::Librarian, SELF_SERVICE, owned_by_caller),
];

/// Policy for staff records
pub static STAFF_POLICY: ResourcePolicy<StaffAction> = ResourcePolicy::new("staff", RULES);

/// Whether `auth` may perform `action` on a staff record
pub fn check_permission(
    auth: &AuthContext,
    action: StaffAction,
    resource: Option<&ResourceContext>,
) -> bool {
    STAFF_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: StaffAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    STAFF_POLICY.assert(auth, action, resource)
}

/// Whether the role may hire staff
pub fn can_create_staff(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Principal)
}

/// Whether the role may export the staff roster
pub fn can_export_staff(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Accountant
    )
}

/// Whether the role may remove staff records
pub fn can_delete_staff(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}
