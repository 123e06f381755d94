//! Teacher profiles
//!
//! Teacher profiles are visible to the whole school community; only the
//! principal assigns classes and subjects.

use crate::policy::predicates::{owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on teacher profiles
    pub enum TeacherAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        AssignClass => "assign_class",
        AssignSubject => "assign_subject",
    }
}

const RULES: &[Rule<TeacherAction>] = &[
    Rule::role(Role::Principal, &[TeacherAction::Create], within_school),
    Rule::role(
        Role::Principal,
        &[
            TeacherAction::Read,
            TeacherAction::Update,
            TeacherAction::Export,
            TeacherAction::AssignClass,
            TeacherAction::AssignSubject,
        ],
        same_school,
    ),
    Rule::role(Role::Teacher, &[TeacherAction::Update], owned_by_caller),
    Rule::role(Role::Teacher, &[TeacherAction::Read], same_school),
    Rule::role(Role::Staff, &[TeacherAction::Read], same_school),
    Rule::role(Role::Guardian, &[TeacherAction::Read], same_school),
    Rule::role(Role::Student, &[TeacherAction::Read], same_school),
];

/// Policy for teacher profiles
pub static TEACHER_POLICY: ResourcePolicy<TeacherAction> =
    ResourcePolicy::new("teacher", RULES);

/// Whether `auth` may perform `action` on a teacher profile
pub fn check_permission(
    auth: &AuthContext,
    action: TeacherAction,
    resource: Option<&ResourceContext>,
) -> bool {
    TEACHER_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: TeacherAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    TEACHER_POLICY.assert(auth, action, resource)
}

/// Whether the role may add teacher profiles
pub fn can_create_teacher(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Principal)
}

/// Whether the role may export teacher profiles
pub fn can_export_teachers(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Principal)
}

/// Whether the role may delete teacher profiles
pub fn can_delete_teacher(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}
