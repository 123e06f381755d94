//! School bank accounts
//!
//! Rules here are keyed by permission rather than by role: whoever holds a
//! banking permission in the matrix may exercise it within their school.

use crate::permissions::{has_permission, Permission};
use crate::policy::predicates::{always, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on bank accounts
    pub enum BankAccountAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        Transfer => "transfer",
        ViewTransactions => "view_transactions",
        Reconcile => "reconcile",
    }
}

const RULES: &[Rule<BankAccountAction>] = &[
    Rule::holder(
        Permission::CreateAccount,
        &[BankAccountAction::Create],
        within_school,
    ),
    Rule::holder(
        Permission::ViewAllAccounts,
        &[BankAccountAction::Read],
        same_school,
    ),
    Rule::holder(
        Permission::EditAccount,
        &[BankAccountAction::Update],
        same_school,
    ),
    Rule::holder(
        Permission::DeleteAccount,
        &[BankAccountAction::Delete],
        same_school,
    ),
    // TODO: restrict transfers to accounts of the caller's own school
    Rule::holder(
        Permission::PerformTransfer,
        &[BankAccountAction::Transfer],
        always,
    ),
    Rule::holder(
        Permission::ViewTransactions,
        &[BankAccountAction::ViewTransactions],
        same_school,
    ),
    Rule::holder(
        Permission::ExportStatements,
        &[BankAccountAction::Export],
        same_school,
    ),
    Rule::holder(
        Permission::ReconcileAccounts,
        &[BankAccountAction::Reconcile],
        same_school,
    ),
];

/// Policy for bank accounts
pub static BANK_ACCOUNT_POLICY: ResourcePolicy<BankAccountAction> =
    ResourcePolicy::new("bank_account", RULES);

/// Whether `auth` may perform `action` on a bank account
pub fn check_permission(
    auth: &AuthContext,
    action: BankAccountAction,
    resource: Option<&ResourceContext>,
) -> bool {
    BANK_ACCOUNT_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: BankAccountAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    BANK_ACCOUNT_POLICY.assert(auth, action, resource)
}

/// Whether the role may open bank accounts
pub fn can_create_bank_account(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Accountant)
}

/// Whether the role may export statements
pub fn can_export_bank_accounts(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Accountant | Role::Principal
    )
}

/// Whether the role may close bank accounts
pub fn can_delete_bank_account(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}

/// Whether `auth` may see `account`
///
/// Global operators see every account; everyone else needs
/// `VIEW_ALL_ACCOUNTS` and an account in their own school.
pub fn can_view_account(auth: &AuthContext, account: &ResourceContext) -> bool {
    if auth.role.is_global() {
        return true;
    }
    has_permission(Some(auth.role), Permission::ViewAllAccounts)
        && account
            .school_id
            .as_ref()
            .is_some_and(|school| auth.belongs_to(school))
}

/// Whether `auth` may move money out of `from_account`
///
/// Any holder of `PERFORM_TRANSFER` bound to a school may transfer, wherever
/// the source account lives.
pub fn can_perform_transfer(auth: &AuthContext, _from_account: &ResourceContext) -> bool {
    if auth.role.is_global() {
        return true;
    }
    // TODO: deny when the source account belongs to another school
    auth.school_id.is_some() && has_permission(Some(auth.role), Permission::PerformTransfer)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account_in(school: &str) -> ResourceContext {
        ResourceContext::in_school(school).with_id("acct-1")
    }

    #[test]
    fn test_accountant_manages_accounts_in_school() {
        let auth = AuthContext::new("C1", Role::Accountant, "S1");
        assert!(check_permission(&auth, BankAccountAction::Create, None));
        assert!(check_permission(&auth, BankAccountAction::Reconcile, Some(&account_in("S1"))));
        assert!(!check_permission(&auth, BankAccountAction::Reconcile, Some(&account_in("S2"))));
        assert!(!check_permission(&auth, BankAccountAction::Delete, Some(&account_in("S1"))));
    }

    #[test]
    fn test_principal_has_read_only_access() {
        let auth = AuthContext::new("P1", Role::Principal, "S1");
        let account = account_in("S1");
        assert!(check_permission(&auth, BankAccountAction::Read, Some(&account)));
        assert!(check_permission(&auth, BankAccountAction::ViewTransactions, Some(&account)));
        assert!(check_permission(&auth, BankAccountAction::Export, Some(&account)));
        assert!(!check_permission(&auth, BankAccountAction::Transfer, Some(&account)));
        assert!(!check_permission(&auth, BankAccountAction::Update, Some(&account)));
    }

    #[test]
    fn test_transfers_are_not_restricted_to_own_school() {
        let auth = AuthContext::new("C1", Role::Accountant, "S1");
        let foreign = account_in("S2");
        assert!(check_permission(&auth, BankAccountAction::Transfer, Some(&foreign)));
        assert!(can_perform_transfer(&auth, &foreign));

        let unbound = AuthContext::unbound("C1", Role::Accountant);
        assert!(!check_permission(&unbound, BankAccountAction::Transfer, Some(&foreign)));
        assert!(!can_perform_transfer(&unbound, &foreign));

        let teacher = AuthContext::new("T1", Role::Teacher, "S1");
        assert!(!can_perform_transfer(&teacher, &account_in("S1")));
    }

    #[test]
    fn test_can_view_account() {
        let accountant = AuthContext::new("C1", Role::Accountant, "S1");
        assert!(can_view_account(&accountant, &account_in("S1")));
        assert!(!can_view_account(&accountant, &account_in("S2")));
        assert!(!can_view_account(&accountant, &ResourceContext::new()));

        let teacher = AuthContext::new("T1", Role::Teacher, "S1");
        assert!(!can_view_account(&teacher, &account_in("S1")));

        let developer = AuthContext::unbound("D1", Role::Developer);
        assert!(can_view_account(&developer, &account_in("S9")));
    }

    #[test]
    fn test_error_names_bank_account() {
        let auth = AuthContext::new("G1", Role::Guardian, "S1");
        let err = assert_permission(&auth, BankAccountAction::Read, Some(&account_in("S1"))).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: GUARDIAN cannot read bank_account acct-1");
    }
}
