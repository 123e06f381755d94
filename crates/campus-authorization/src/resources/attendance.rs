//! Attendance records

use crate::policy::predicates::{linked_to_caller, owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on attendance records
    pub enum AttendanceAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        /// Mark a whole class at once
        BulkAction => "bulk_action",
    }
}

const RULES: &[Rule<AttendanceAction>] = &[
    Rule::role(Role::Principal, &[AttendanceAction::Create], within_school),
    Rule::role(
        Role::Principal,
        &[
            AttendanceAction::Read,
            AttendanceAction::Update,
            AttendanceAction::Delete,
            AttendanceAction::Export,
            AttendanceAction::BulkAction,
        ],
        same_school,
    ),
    Rule::role(Role::Teacher, &[AttendanceAction::Create], within_school),
    Rule::role(
        Role::Teacher,
        &[
            AttendanceAction::Read,
            AttendanceAction::Update,
            AttendanceAction::Export,
            AttendanceAction::BulkAction,
        ],
        same_school,
    ),
    Rule::role(Role::Staff, &[AttendanceAction::Read], same_school),
    Rule::role(Role::Guardian, &[AttendanceAction::Read], linked_to_caller),
    Rule::role(Role::Student, &[AttendanceAction::Read], owned_by_caller),
];

/// Policy for attendance records
pub static ATTENDANCE_POLICY: ResourcePolicy<AttendanceAction> =
    ResourcePolicy::new("attendance_record", RULES);

/// Whether `auth` may perform `action` on an attendance record
pub fn check_permission(
    auth: &AuthContext,
    action: AttendanceAction,
    resource: Option<&ResourceContext>,
) -> bool {
    ATTENDANCE_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: AttendanceAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    ATTENDANCE_POLICY.assert(auth, action, resource)
}

/// Whether the role may take attendance
pub fn can_create_attendance(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may export attendance reports
pub fn can_export_attendance(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may delete attendance records
pub fn can_delete_attendance(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Principal)
}
