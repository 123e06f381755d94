//! Student records

use crate::policy::predicates::{linked_to_caller, owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on student records
    pub enum StudentAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        BulkAction => "bulk_action",
        Enroll => "enroll",
        Promote => "promote",
    }
}

const RULES: &[Rule<StudentAction>] = &[
    Rule::role(Role::Principal, &[StudentAction::Create], within_school),
    Rule::role(
        Role::Principal,
        &[
            StudentAction::Read,
            StudentAction::Update,
            StudentAction::Export,
            StudentAction::Enroll,
            StudentAction::Promote,
            StudentAction::BulkAction,
        ],
        same_school,
    ),
    Rule::role(Role::Staff, &[StudentAction::Create], within_school),
    Rule::role(
        Role::Staff,
        &[StudentAction::Read, StudentAction::Update, StudentAction::Enroll],
        same_school,
    ),
    Rule::role(
        Role::Teacher,
        &[StudentAction::Read, StudentAction::Export],
        same_school,
    ),
    Rule::role(Role::Accountant, &[StudentAction::Read], same_school),
    Rule::role(Role::Guardian, &[StudentAction::Read], linked_to_caller),
    Rule::role(Role::Student, &[StudentAction::Read], owned_by_caller),
];

/// Policy for student records
pub static STUDENT_POLICY: ResourcePolicy<StudentAction> = ResourcePolicy::new("student", RULES);

/// Whether `auth` may perform `action` on a student record
pub fn check_permission(
    auth: &AuthContext,
    action: StudentAction,
    resource: Option<&ResourceContext>,
) -> bool {
    STUDENT_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: StudentAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    STUDENT_POLICY.assert(auth, action, resource)
}

/// Whether the role may register students
pub fn can_create_student(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Staff
    )
}

/// Whether the role may export student lists
pub fn can_export_students(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may delete student records
pub fn can_delete_student(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}
