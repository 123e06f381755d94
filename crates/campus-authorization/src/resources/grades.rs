//! Grade entries
//!
//! The teacher who entered a grade owns it. Publication is the principal's
//! call.

use crate::policy::predicates::{linked_to_caller, owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on grade entries
    pub enum GradeAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        Publish => "publish",
    }
}

const RULES: &[Rule<GradeAction>] = &[
    Rule::role(Role::Teacher, &[GradeAction::Create], within_school),
    Rule::role(
        Role::Teacher,
        &[GradeAction::Update, GradeAction::Delete],
        owned_by_caller,
    ),
    Rule::role(
        Role::Teacher,
        &[GradeAction::Read, GradeAction::Export],
        same_school,
    ),
    Rule::role(
        Role::Principal,
        &[
            GradeAction::Read,
            GradeAction::Update,
            GradeAction::Export,
            GradeAction::Publish,
        ],
        same_school,
    ),
    Rule::role(Role::Guardian, &[GradeAction::Read], linked_to_caller),
    Rule::role(Role::Student, &[GradeAction::Read], owned_by_caller),
];

/// Policy for grade entries
pub static GRADE_POLICY: ResourcePolicy<GradeAction> = ResourcePolicy::new("grade", RULES);

/// Whether `auth` may perform `action` on a grade entry
pub fn check_permission(
    auth: &AuthContext,
    action: GradeAction,
    resource: Option<&ResourceContext>,
) -> bool {
    GRADE_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: GradeAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    GRADE_POLICY.assert(auth, action, resource)
}

/// Whether the role may enter grades
pub fn can_create_grade(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Teacher)
}

/// Whether the role may export grade sheets
pub fn can_export_grades(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may delete any grade entry
pub fn can_delete_grade(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}
