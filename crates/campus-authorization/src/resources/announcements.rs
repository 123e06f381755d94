//! School announcements

use crate::policy::predicates::{owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on announcements
    pub enum AnnouncementAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        Publish => "publish",
        Archive => "archive",
    }
}

const READ_ONLY: &[AnnouncementAction] = &[AnnouncementAction::Read];

const RULES: &[Rule<AnnouncementAction>] = &[
    Rule::role(Role::Principal, &[AnnouncementAction::Create], within_school),
    Rule::role(
        Role::Principal,
        &[
            AnnouncementAction::Read,
            AnnouncementAction::Update,
            AnnouncementAction::Delete,
            AnnouncementAction::Export,
            AnnouncementAction::Publish,
            AnnouncementAction::Archive,
        ],
        same_school,
    ),
    Rule::role(Role::Teacher, &[AnnouncementAction::Create], within_school),
    Rule::role(
        Role::Teacher,
        &[AnnouncementAction::Update, AnnouncementAction::Delete],
        owned_by_caller,
    ),
    Rule::role(Role::Teacher, READ_ONLY, same_school),
    Rule::role(Role::Staff, READ_ONLY, same_school),
    Rule::role(Role::Accountant, READ_ONLY, same_school),
    Rule::role(Role::Librarian, READ_ONLY, same_school),
    Rule::role(Role::Guardian, READ_ONLY, same_school),
    Rule::role(Role::Student, READ_ONLY, same_school),
];

/// Policy for announcements
pub static ANNOUNCEMENT_POLICY: ResourcePolicy<AnnouncementAction> =
    ResourcePolicy::new("announcement", RULES);

/// Whether `auth` may perform `action` on an announcement
pub fn check_permission(
    auth: &AuthContext,
    action: AnnouncementAction,
    resource: Option<&ResourceContext>,
) -> bool {
    ANNOUNCEMENT_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: AnnouncementAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    ANNOUNCEMENT_POLICY.assert(auth, action, resource)
}

/// Whether the role may draft announcements
pub fn can_create_announcement(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Teacher
    )
}

/// Whether the role may export announcements
pub fn can_export_announcements(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Principal)
}

/// Whether the role may delete any announcement of the school
pub fn can_delete_announcement(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Principal)
}
