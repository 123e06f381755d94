//! Tenant schools, as managed from the operator console
//!
//! The global operator role manages every tenant. A school ADMIN manages its
//! own school record through the tenant-admin step and nothing else; no
//! other role has a rule here.

use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on tenant schools
    pub enum SchoolAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        Suspend => "suspend",
        ManageBilling => "manage_billing",
        ManageDomains => "manage_domains",
        ViewAuditLogs => "view_audit_logs",
    }
}

const RULES: &[Rule<SchoolAction>] = &[];

/// Policy for tenant schools
pub static SCHOOL_POLICY: ResourcePolicy<SchoolAction> = ResourcePolicy::new("school", RULES);

/// Whether `auth` may perform `action` on a school
pub fn check_permission(
    auth: &AuthContext,
    action: SchoolAction,
    resource: Option<&ResourceContext>,
) -> bool {
    SCHOOL_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: SchoolAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    SCHOOL_POLICY.assert(auth, action, resource)
}

/// Whether the role may onboard new schools
pub fn can_create_school(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}

/// Whether the role may export school records
pub fn can_export_schools(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}

/// Whether the role may delete schools
pub fn can_delete_school(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}
