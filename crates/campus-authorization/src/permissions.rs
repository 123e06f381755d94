//! Static role to permission matrix
//!
//! The matrix is built once on first use and never mutated. Entries keep
//! their declaration order so `permissions_for_role` is reproducible.

use campus_core::{CampusError, Role};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use Role::{Accountant, Admin, Developer, Principal};

/// Abstract capability names granted to roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    /// See every bank account of the school
    ViewAllAccounts,
    /// Open a bank account
    CreateAccount,
    /// Edit bank account details
    EditAccount,
    /// Close a bank account
    DeleteAccount,
    /// Move money between accounts
    PerformTransfer,
    /// See account transactions
    ViewTransactions,
    /// Export account statements
    ExportStatements,
    /// Reconcile accounts against statements
    ReconcileAccounts,
    /// Raise an invoice
    CreateInvoice,
    /// See invoices
    ViewInvoices,
    /// Edit, send, void and record payments on invoices
    ManageInvoices,
    /// Approve or reject submitted timesheets
    ApproveTimesheets,
    /// See every timesheet of the school
    ViewTimesheets,
    /// Create, suspend and delete tenant schools
    ManageSchools,
    /// Manage tenant subscriptions and billing
    ManageBilling,
    /// Manage tenant custom domains
    ManageDomains,
    /// Read the audit log
    ViewAuditLogs,
}

impl Permission {
    /// Every permission, in declaration order
    pub const ALL: [Permission; 17] = [
        Permission::ViewAllAccounts,
        Permission::CreateAccount,
        Permission::EditAccount,
        Permission::DeleteAccount,
        Permission::PerformTransfer,
        Permission::ViewTransactions,
        Permission::ExportStatements,
        Permission::ReconcileAccounts,
        Permission::CreateInvoice,
        Permission::ViewInvoices,
        Permission::ManageInvoices,
        Permission::ApproveTimesheets,
        Permission::ViewTimesheets,
        Permission::ManageSchools,
        Permission::ManageBilling,
        Permission::ManageDomains,
        Permission::ViewAuditLogs,
    ];

    /// Wire name of the permission
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::ViewAllAccounts => "VIEW_ALL_ACCOUNTS",
            Permission::CreateAccount => "CREATE_ACCOUNT",
            Permission::EditAccount => "EDIT_ACCOUNT",
            Permission::DeleteAccount => "DELETE_ACCOUNT",
            Permission::PerformTransfer => "PERFORM_TRANSFER",
            Permission::ViewTransactions => "VIEW_TRANSACTIONS",
            Permission::ExportStatements => "EXPORT_STATEMENTS",
            Permission::ReconcileAccounts => "RECONCILE_ACCOUNTS",
            Permission::CreateInvoice => "CREATE_INVOICE",
            Permission::ViewInvoices => "VIEW_INVOICES",
            Permission::ManageInvoices => "MANAGE_INVOICES",
            Permission::ApproveTimesheets => "APPROVE_TIMESHEETS",
            Permission::ViewTimesheets => "VIEW_TIMESHEETS",
            Permission::ManageSchools => "MANAGE_SCHOOLS",
            Permission::ManageBilling => "MANAGE_BILLING",
            Permission::ManageDomains => "MANAGE_DOMAINS",
            Permission::ViewAuditLogs => "VIEW_AUDIT_LOGS",
        }
    }

    /// Roles declared for this permission
    fn declared_roles(&self) -> &'static [Role] {
        match self {
            Permission::ViewAllAccounts => &[Developer, Admin, Accountant, Principal],
            Permission::CreateAccount => &[Developer, Admin, Accountant],
            Permission::EditAccount => &[Developer, Admin, Accountant],
            Permission::DeleteAccount => &[Developer, Admin],
            Permission::PerformTransfer => &[Developer, Admin, Accountant],
            Permission::ViewTransactions => &[Developer, Admin, Accountant, Principal],
            Permission::ExportStatements => &[Developer, Admin, Accountant, Principal],
            Permission::ReconcileAccounts => &[Developer, Admin, Accountant],
            Permission::CreateInvoice => &[Developer, Admin, Accountant],
            Permission::ViewInvoices => &[Developer, Admin, Accountant, Principal],
            Permission::ManageInvoices => &[Developer, Admin, Accountant],
            Permission::ApproveTimesheets => &[Developer, Admin, Principal],
            Permission::ViewTimesheets => &[Developer, Admin, Principal, Accountant],
            Permission::ManageSchools => &[Developer],
            Permission::ManageBilling => &[Developer],
            Permission::ManageDomains => &[Developer],
            Permission::ViewAuditLogs => &[Developer, Admin],
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Permission::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| CampusError::invalid(format!("unknown permission: {s}")))
    }
}

/// Immutable permission name to role-set map
#[derive(Debug)]
pub struct PermissionMatrix {
    entries: IndexMap<Permission, HashSet<Role>>,
}

impl PermissionMatrix {
    fn build() -> Self {
        let entries = Permission::ALL
            .iter()
            .map(|permission| {
                let roles = permission.declared_roles().iter().copied().collect();
                (*permission, roles)
            })
            .collect();
        Self { entries }
    }

    /// Whether `role` holds `permission`; an absent role holds nothing
    pub fn has_permission(&self, role: Option<Role>, permission: Permission) -> bool {
        let Some(role) = role else {
            return false;
        };
        self.entries
            .get(&permission)
            .map_or(false, |roles| roles.contains(&role))
    }

    /// Permissions held by `role`, in declaration order
    pub fn permissions_for_role(&self, role: Role) -> Vec<Permission> {
        self.entries
            .iter()
            .filter(|(_, roles)| roles.contains(&role))
            .map(|(permission, _)| *permission)
            .collect()
    }

    /// Roles holding `permission`, in role declaration order
    pub fn roles_for(&self, permission: Permission) -> Vec<Role> {
        let Some(roles) = self.entries.get(&permission) else {
            return Vec::new();
        };
        Role::ALL
            .iter()
            .copied()
            .filter(|role| roles.contains(role))
            .collect()
    }

    /// Iterate entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Permission, Vec<Role>)> + '_ {
        self.entries
            .keys()
            .map(move |permission| (*permission, self.roles_for(*permission)))
    }
}

/// The process-wide permission matrix
pub static PERMISSIONS: Lazy<PermissionMatrix> = Lazy::new(PermissionMatrix::build);

/// Whether `role` holds `permission` in the process-wide matrix
pub fn has_permission(role: Option<Role>, permission: Permission) -> bool {
    PERMISSIONS.has_permission(role, permission)
}

/// Permissions held by `role` in the process-wide matrix, in declaration order
pub fn permissions_for_role(role: Role) -> Vec<Permission> {
    PERMISSIONS.permissions_for_role(role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_role_holds_nothing() {
        for permission in Permission::ALL {
            assert!(!has_permission(None, permission));
        }
    }

    #[test]
    fn test_membership() {
        assert!(has_permission(Some(Role::Accountant), Permission::ViewAllAccounts));
        assert!(has_permission(Some(Role::Principal), Permission::ViewAllAccounts));
        assert!(!has_permission(Some(Role::Teacher), Permission::ViewAllAccounts));
        assert!(!has_permission(Some(Role::Admin), Permission::ManageSchools));
        assert!(!has_permission(Some(Role::Unrecognized), Permission::ViewInvoices));
    }

    #[test]
    fn test_permissions_for_role_in_declaration_order() {
        assert_eq!(
            permissions_for_role(Role::Principal),
            vec![
                Permission::ViewAllAccounts,
                Permission::ViewTransactions,
                Permission::ExportStatements,
                Permission::ViewInvoices,
                Permission::ApproveTimesheets,
                Permission::ViewTimesheets,
            ]
        );
        assert_eq!(permissions_for_role(Role::Developer), Permission::ALL.to_vec());
        assert!(permissions_for_role(Role::Guardian).is_empty());
    }

    #[test]
    fn test_permissions_for_role_agrees_with_has_permission() {
        for role in Role::ALL {
            let held = permissions_for_role(role);
            for permission in Permission::ALL {
                assert_eq!(
                    held.contains(&permission),
                    has_permission(Some(role), permission),
                    "{role} / {permission}"
                );
            }
        }
    }

    #[test]
    fn test_permission_names_round_trip() {
        for permission in Permission::ALL {
            assert_eq!(permission.as_str().parse::<Permission>().unwrap(), permission);
        }
        assert!("view_all_accounts".parse::<Permission>().is_ok());
        assert!("GRANT_EVERYTHING".parse::<Permission>().is_err());
    }

    #[test]
    fn test_roles_for_follows_role_order() {
        assert_eq!(
            PERMISSIONS.roles_for(Permission::ViewTimesheets),
            vec![Role::Developer, Role::Admin, Role::Principal, Role::Accountant]
        );
    }
}
