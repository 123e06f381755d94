//! Exams and exam results

use crate::policy::predicates::{owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on exams
    pub enum ExamAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        Schedule => "schedule",
        PublishResults => "publish_results",
    }
}

const RULES: &[Rule<ExamAction>] = &[
    Rule::role(Role::Principal, &[ExamAction::Create], within_school),
    Rule::role(
        Role::Principal,
        &[
            ExamAction::Read,
            ExamAction::Update,
            ExamAction::Delete,
            ExamAction::Export,
            ExamAction::Schedule,
            ExamAction::PublishResults,
        ],
        same_school,
    ),
    Rule::role(Role::Teacher, &[ExamAction::Create], within_school),
    Rule::role(Role::Teacher, &[ExamAction::Update], owned_by_caller),
    Rule::role(
        Role::Teacher,
        &[ExamAction::Read, ExamAction::Export],
        same_school,
    ),
    Rule::role(
        Role::Staff,
        &[ExamAction::Read, ExamAction::Schedule],
        same_school,
    ),
    Rule::role(Role::Guardian, &[ExamAction::Read], same_school),
    Rule::role(Role::Student, &[ExamAction::Read], same_school),
];

/// Policy for exams
pub static EXAM_POLICY: ResourcePolicy<ExamAction> = ResourcePolicy::new("exam", RULES);

/// Whether `auth` may perform `action` on an exam
pub fn check_permission(
    auth: &AuthContext,
    action: ExamAction,
    resource: Option<&ResourceContext>,
) -> bool {
    EXAM_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: ExamAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    EXAM_POLICY.assert(auth, action, resource)
}

/// Whether the role may set exams
pub fn can_create_exam(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may export exam data
pub fn can_export_exams(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may delete exams
pub fn can_delete_exam(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Principal)
}
