//! Policy evaluation
//!
//! One generic engine, one rule table per resource module. Evaluation order
//! is fixed and the first matching step decides:
//!
//! 1. the global override role is allowed
//! 2. a caller with no tenant binding is denied
//! 3. the tenant admin is allowed inside its own school (and for records
//!    that do not exist yet)
//! 4. the first rule naming the caller's role and the action decides
//! 5. anything else is denied

use super::actions::ResourceAction;
use super::predicates::Predicate;
use crate::permissions::{has_permission, Permission};
use campus_core::{AuthContext, AuthzError, ResourceContext, Role};
use serde::Serialize;

/// Who a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grantee {
    /// Exactly one role
    Role(Role),
    /// Every role holding a permission in the matrix
    Holder(Permission),
}

impl Grantee {
    /// Whether the rule applies to `role`
    pub fn admits(&self, role: Role) -> bool {
        match self {
            Grantee::Role(granted) => *granted == role,
            Grantee::Holder(permission) => has_permission(Some(role), *permission),
        }
    }
}

/// One row of a module's rule table
#[derive(Debug, Clone, Copy)]
pub struct Rule<A: 'static> {
    /// Roles the rule applies to
    pub grantee: Grantee,
    /// Actions the rule covers
    pub actions: &'static [A],
    /// Decides once grantee and action match
    pub predicate: Predicate,
}

impl<A> Rule<A> {
    /// Rule for a single role
    pub const fn role(role: Role, actions: &'static [A], predicate: Predicate) -> Self {
        Self {
            grantee: Grantee::Role(role),
            actions,
            predicate,
        }
    }

    /// Rule for every holder of a permission
    pub const fn holder(
        permission: Permission,
        actions: &'static [A],
        predicate: Predicate,
    ) -> Self {
        Self {
            grantee: Grantee::Holder(permission),
            actions,
            predicate,
        }
    }
}

/// Which evaluation step produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "step")]
pub enum DecisionReason {
    /// Global override role
    GlobalOverride,
    /// Caller has no tenant binding
    NoTenant,
    /// Tenant admin inside its school
    TenantAdmin,
    /// Tenant admin outside its school
    ForeignTenant,
    /// A rule matched; `rule` is its index in the table
    Rule {
        /// Index into the module's rule table
        rule: usize,
    },
    /// No rule covers the role and action
    NoMatchingRule,
    /// The action name is not part of the module
    UnknownAction,
}

/// Outcome of evaluating one request against a policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    /// Whether access is allowed
    pub allowed: bool,
    /// Step that decided
    pub reason: DecisionReason,
}

impl Decision {
    fn allow(reason: DecisionReason) -> Self {
        Self {
            allowed: true,
            reason,
        }
    }

    fn deny(reason: DecisionReason) -> Self {
        Self {
            allowed: false,
            reason,
        }
    }
}

/// Rule table and evaluation for one protected resource type
#[derive(Debug)]
pub struct ResourcePolicy<A: 'static> {
    resource_type: &'static str,
    rules: &'static [Rule<A>],
}

impl<A: ResourceAction> ResourcePolicy<A> {
    /// Policy for `resource_type` evaluated against `rules`
    pub const fn new(resource_type: &'static str, rules: &'static [Rule<A>]) -> Self {
        Self {
            resource_type,
            rules,
        }
    }

    /// Resource type name used in error messages
    pub fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    /// The rule table, in evaluation order
    pub fn rules(&self) -> &'static [Rule<A>] {
        self.rules
    }

    /// Evaluate and report which step decided
    pub fn decide(
        &self,
        auth: &AuthContext,
        action: A,
        resource: Option<&ResourceContext>,
    ) -> Decision {
        if auth.role.is_global() {
            return Decision::allow(DecisionReason::GlobalOverride);
        }

        let Some(caller_school) = auth.school_id.as_ref() else {
            return Decision::deny(DecisionReason::NoTenant);
        };

        if auth.role.is_tenant_admin() {
            return match resource.and_then(|r| r.school_id.as_ref()) {
                Some(target) if target != caller_school => {
                    Decision::deny(DecisionReason::ForeignTenant)
                }
                _ => Decision::allow(DecisionReason::TenantAdmin),
            };
        }

        let matched = self
            .rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.grantee.admits(auth.role) && rule.actions.contains(&action));

        match matched {
            Some((index, rule)) => Decision {
                allowed: (rule.predicate)(auth, resource),
                reason: DecisionReason::Rule { rule: index },
            },
            None => Decision::deny(DecisionReason::NoMatchingRule),
        }
    }

    /// Whether `auth` may perform `action` on `resource`
    pub fn check(&self, auth: &AuthContext, action: A, resource: Option<&ResourceContext>) -> bool {
        self.decide(auth, action, resource).allowed
    }

    /// Like [`check`](Self::check), but a denial is an `Unauthorized` error
    pub fn assert(
        &self,
        auth: &AuthContext,
        action: A,
        resource: Option<&ResourceContext>,
    ) -> Result<(), AuthzError> {
        if self.check(auth, action, resource) {
            Ok(())
        } else {
            Err(self.denial(auth, action.as_str(), resource))
        }
    }

    /// Evaluate an action given by name; unknown names are denied
    pub fn decide_named(
        &self,
        auth: &AuthContext,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> Decision {
        match A::from_name(action) {
            Some(action) => self.decide(auth, action, resource),
            None => Decision::deny(DecisionReason::UnknownAction),
        }
    }

    fn denial(
        &self,
        auth: &AuthContext,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> AuthzError {
        AuthzError::unauthorized(
            auth.role,
            action,
            self.resource_type,
            resource.and_then(|r| r.id.clone()),
        )
    }
}

/// Object-safe view of a policy, for dispatch by resource and action name
pub trait PolicyCheck: Send + Sync {
    /// Resource type name
    fn resource_type(&self) -> &'static str;

    /// Wire names of every action, in declaration order
    fn action_names(&self) -> Vec<&'static str>;

    /// Evaluate by action name and report the deciding step
    fn explain_named(
        &self,
        auth: &AuthContext,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> Decision;

    /// Evaluate by action name; unknown names are denied
    fn check_named(
        &self,
        auth: &AuthContext,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> bool {
        self.explain_named(auth, action, resource).allowed
    }

    /// Assert by action name; unknown names are an `Unauthorized` error
    fn assert_named(
        &self,
        auth: &AuthContext,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> Result<(), AuthzError>;
}

impl<A: ResourceAction> PolicyCheck for ResourcePolicy<A> {
    fn resource_type(&self) -> &'static str {
        self.resource_type
    }

    fn action_names(&self) -> Vec<&'static str> {
        A::ALL.iter().map(ResourceAction::as_str).collect()
    }

    fn explain_named(
        &self,
        auth: &AuthContext,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> Decision {
        self.decide_named(auth, action, resource)
    }

    fn assert_named(
        &self,
        auth: &AuthContext,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> Result<(), AuthzError> {
        if self.decide_named(auth, action, resource).allowed {
            Ok(())
        } else {
            Err(self.denial(auth, action.trim(), resource))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::actions::resource_actions;
    use crate::policy::predicates::{always, owned_by_caller, same_school};

    resource_actions! {
        enum NoteAction {
            Create => "create",
            Read => "read",
            Update => "update",
            Delete => "delete",
            Export => "export",
            Pin => "pin",
        }
    }

    const NOTE_RULES: &[Rule<NoteAction>] = &[
        Rule::role(Role::Teacher, &[NoteAction::Read], same_school),
        Rule::role(Role::Teacher, &[NoteAction::Read, NoteAction::Pin], always),
        Rule::role(Role::Guardian, &[NoteAction::Update], owned_by_caller),
        Rule::holder(Permission::ViewAuditLogs, &[NoteAction::Export], same_school),
    ];

    static NOTE_POLICY: ResourcePolicy<NoteAction> = ResourcePolicy::new("note", NOTE_RULES);

    #[test]
    fn test_first_matching_rule_decides() {
        let auth = AuthContext::new("U1", Role::Teacher, "S1");
        let foreign = ResourceContext::in_school("S2");
        // rule 0 matches first and denies; rule 1 would allow
        let decision = NOTE_POLICY.decide(&auth, NoteAction::Read, Some(&foreign));
        assert_eq!(
            decision,
            Decision {
                allowed: false,
                reason: DecisionReason::Rule { rule: 0 }
            }
        );
        assert!(NOTE_POLICY.check(&auth, NoteAction::Pin, Some(&foreign)));
    }

    #[test]
    fn test_precedence_steps() {
        let dev = AuthContext::unbound("D1", Role::Developer);
        assert_eq!(
            NOTE_POLICY.decide(&dev, NoteAction::Delete, None).reason,
            DecisionReason::GlobalOverride
        );

        let unbound_admin = AuthContext::unbound("A1", Role::Admin);
        assert_eq!(
            NOTE_POLICY.decide(&unbound_admin, NoteAction::Read, None),
            Decision::deny(DecisionReason::NoTenant)
        );

        let admin = AuthContext::new("A1", Role::Admin, "S1");
        assert!(NOTE_POLICY.check(&admin, NoteAction::Delete, None));
        assert!(NOTE_POLICY.check(&admin, NoteAction::Delete, Some(&ResourceContext::new())));
        assert_eq!(
            NOTE_POLICY
                .decide(&admin, NoteAction::Read, Some(&ResourceContext::in_school("S2")))
                .reason,
            DecisionReason::ForeignTenant
        );

        let student = AuthContext::new("ST1", Role::Student, "S1");
        assert_eq!(
            NOTE_POLICY.decide(&student, NoteAction::Read, None),
            Decision::deny(DecisionReason::NoMatchingRule)
        );
    }

    #[test]
    fn test_holder_rules_consult_the_matrix() {
        let same = ResourceContext::in_school("S1");
        // only DEVELOPER and ADMIN hold VIEW_AUDIT_LOGS, and both decide earlier
        let admin = AuthContext::new("A1", Role::Admin, "S1");
        assert_eq!(
            NOTE_POLICY.decide(&admin, NoteAction::Export, Some(&same)).reason,
            DecisionReason::TenantAdmin
        );

        let teacher = AuthContext::new("U1", Role::Teacher, "S1");
        assert!(!Grantee::Holder(Permission::ViewAuditLogs).admits(Role::Teacher));
        assert!(Grantee::Holder(Permission::ViewAuditLogs).admits(Role::Admin));
        assert_eq!(
            NOTE_POLICY.decide(&teacher, NoteAction::Export, Some(&same)),
            Decision::deny(DecisionReason::NoMatchingRule)
        );
    }

    #[test]
    fn test_tenant_admin_step_precedes_every_rule_table() {
        let admin = AuthContext::new("A1", Role::Admin, "S1");
        let own = ResourceContext::in_school("S1").with_id("n1");
        for action in NoteAction::ALL {
            assert_eq!(
                NOTE_POLICY.decide(&admin, *action, Some(&own)),
                Decision::allow(DecisionReason::TenantAdmin)
            );
        }
    }

    #[test]
    fn test_assert_reports_role_action_and_id() {
        let auth = AuthContext::new("G1", Role::Guardian, "S1");
        let note = ResourceContext::in_school("S1").with_id("n7").with_owner("G2");
        let err = NOTE_POLICY
            .assert(&auth, NoteAction::Update, Some(&note))
            .unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: GUARDIAN cannot update note n7");
    }

    #[test]
    fn test_unknown_action_names_are_denied() {
        let admin = AuthContext::new("A1", Role::Admin, "S1");
        let policy: &dyn PolicyCheck = &NOTE_POLICY;
        assert!(policy.check_named(&admin, "pin", None));
        assert!(policy.check_named(&admin, "PIN", None));
        assert!(!policy.check_named(&admin, "shred", None));
        assert_eq!(
            policy.explain_named(&admin, "shred", None).reason,
            DecisionReason::UnknownAction
        );
        let err = policy.assert_named(&admin, "shred", None).unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: ADMIN cannot shred note");
    }

    #[test]
    fn test_action_names_in_declaration_order() {
        assert_eq!(
            NOTE_POLICY.action_names(),
            vec!["create", "read", "update", "delete", "export", "pin"]
        );
    }
}
