//! Staff timesheets
//!
//! Employees keep their own timesheets; approval and oversight follow the
//! timesheet permissions in the matrix.

use crate::permissions::Permission;
use crate::policy::predicates::{owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on timesheets
    pub enum TimesheetAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        Submit => "submit",
        Approve => "approve",
        Reject => "reject",
    }
}

const OWN_SHEET: &[TimesheetAction] = &[
    TimesheetAction::Read,
    TimesheetAction::Update,
    TimesheetAction::Submit,
];

const RULES: &[Rule<TimesheetAction>] = &[
    Rule::role(Role::Teacher, &[TimesheetAction::Create], within_school),
    Rule::role(Role::Teacher, OWN_SHEET, owned_by_caller),
    Rule::role(Role::Staff, &[TimesheetAction::Create], within_school),
    Rule::role(Role::Staff, OWN_SHEET, owned_by_caller),
    Rule::role(Role::Librarian, &[TimesheetAction::Create], within_school),
    Rule::role(Role::Librarian, OWN_SHEET, owned_by_caller),
    Rule::holder(
        Permission::ApproveTimesheets,
        &[TimesheetAction::Approve, TimesheetAction::Reject],
        same_school,
    ),
    Rule::holder(
        Permission::ViewTimesheets,
        &[TimesheetAction::Read, TimesheetAction::Export],
        same_school,
    ),
];

/// Policy for timesheets
pub static TIMESHEET_POLICY: ResourcePolicy<TimesheetAction> =
    ResourcePolicy::new("timesheet", RULES);

/// Whether `auth` may perform `action` on a timesheet
pub fn check_permission(
    auth: &AuthContext,
    action: TimesheetAction,
    resource: Option<&ResourceContext>,
) -> bool {
    TIMESHEET_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: TimesheetAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    TIMESHEET_POLICY.assert(auth, action, resource)
}

/// Whether the role keeps timesheets
pub fn can_create_timesheet(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Teacher | Role::Staff | Role::Librarian
    )
}

/// Whether the role may export the school's timesheets
pub fn can_export_timesheets(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Principal | Role::Accountant
    )
}

/// Whether the role may delete timesheets
pub fn can_delete_timesheet(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet_of(owner: &str) -> ResourceContext {
        ResourceContext::in_school("S1").with_id("ts1").with_owner(owner)
    }

    #[test]
    fn test_employee_submits_own_sheet() {
        let auth = AuthContext::new("L1", Role::Librarian, "S1");
        assert!(check_permission(&auth, TimesheetAction::Create, None));
        assert!(check_permission(&auth, TimesheetAction::Submit, Some(&sheet_of("L1"))));
        assert!(!check_permission(&auth, TimesheetAction::Read, Some(&sheet_of("T1"))));
        assert!(!check_permission(&auth, TimesheetAction::Approve, Some(&sheet_of("L1"))));
    }

    #[test]
    fn test_principal_approves_accountant_reviews() {
        let principal = AuthContext::new("P1", Role::Principal, "S1");
        let accountant = AuthContext::new("C1", Role::Accountant, "S1");
        let sheet = sheet_of("T1");

        assert!(check_permission(&principal, TimesheetAction::Approve, Some(&sheet)));
        assert!(check_permission(&principal, TimesheetAction::Reject, Some(&sheet)));
        assert!(check_permission(&accountant, TimesheetAction::Export, Some(&sheet)));
        assert!(!check_permission(&accountant, TimesheetAction::Approve, Some(&sheet)));
        assert!(!check_permission(&principal, TimesheetAction::Update, Some(&sheet)));
    }
}
