//! Fee invoices
//!
//! Billing staff are identified through the invoice permissions. Guardians
//! see the invoices addressed to them.

use crate::permissions::Permission;
use crate::policy::predicates::{owned_by_caller, same_school, within_school};
use crate::policy::{resource_actions, ResourcePolicy, Rule};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};

resource_actions! {
    /// Actions on invoices
    pub enum InvoiceAction {
        Create => "create",
        Read => "read",
        Update => "update",
        Delete => "delete",
        Export => "export",
        BulkAction => "bulk_action",
        Send => "send",
        RecordPayment => "record_payment",
        Void => "void",
    }
}

const RULES: &[Rule<InvoiceAction>] = &[
    Rule::holder(
        Permission::CreateInvoice,
        &[InvoiceAction::Create],
        within_school,
    ),
    Rule::holder(
        Permission::ViewInvoices,
        &[InvoiceAction::Read, InvoiceAction::Export],
        same_school,
    ),
    Rule::holder(
        Permission::ManageInvoices,
        &[
            InvoiceAction::Update,
            InvoiceAction::Send,
            InvoiceAction::RecordPayment,
            InvoiceAction::Void,
            InvoiceAction::BulkAction,
        ],
        same_school,
    ),
    Rule::role(Role::Guardian, &[InvoiceAction::Read], owned_by_caller),
];

/// Policy for invoices
pub static INVOICE_POLICY: ResourcePolicy<InvoiceAction> = ResourcePolicy::new("invoice", RULES);

/// Whether `auth` may perform `action` on an invoice
pub fn check_permission(
    auth: &AuthContext,
    action: InvoiceAction,
    resource: Option<&ResourceContext>,
) -> bool {
    INVOICE_POLICY.check(auth, action, resource)
}

/// Fail with `Unauthorized` unless `auth` may perform `action`
pub fn assert_permission(
    auth: &AuthContext,
    action: InvoiceAction,
    resource: Option<&ResourceContext>,
) -> Result<(), AuthzError> {
    INVOICE_POLICY.assert(auth, action, resource)
}

/// Whether the role may raise invoices
pub fn can_create_invoice(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin | Role::Accountant)
}

/// Whether the role may export invoices
pub fn can_export_invoices(role: Role) -> bool {
    matches!(
        role,
        Role::Developer | Role::Admin | Role::Accountant | Role::Principal
    )
}

/// Whether the role may delete invoices; accountants void instead
pub fn can_delete_invoice(role: Role) -> bool {
    matches!(role, Role::Developer | Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accountant_voids_but_cannot_delete() {
        let auth = AuthContext::new("C1", Role::Accountant, "S1");
        let invoice = ResourceContext::in_school("S1").with_id("inv-1");
        assert!(check_permission(&auth, InvoiceAction::Void, Some(&invoice)));
        assert!(check_permission(&auth, InvoiceAction::RecordPayment, Some(&invoice)));
        assert!(!check_permission(&auth, InvoiceAction::Delete, Some(&invoice)));
    }

    #[test]
    fn test_principal_views_only() {
        let auth = AuthContext::new("P1", Role::Principal, "S1");
        let invoice = ResourceContext::in_school("S1");
        assert!(check_permission(&auth, InvoiceAction::Export, Some(&invoice)));
        assert!(!check_permission(&auth, InvoiceAction::Send, Some(&invoice)));
        assert!(!check_permission(&auth, InvoiceAction::Create, None));
    }

    #[test]
    fn test_guardian_reads_addressed_invoices() {
        let auth = AuthContext::new("G1", Role::Guardian, "S1");
        let mine = ResourceContext::in_school("S1").with_owner("G1");
        let theirs = ResourceContext::in_school("S1").with_owner("G2");
        assert!(check_permission(&auth, InvoiceAction::Read, Some(&mine)));
        assert!(!check_permission(&auth, InvoiceAction::Read, Some(&theirs)));
        assert!(!check_permission(&auth, InvoiceAction::RecordPayment, Some(&mine)));
    }
}
