//! Per-request authorization scope

use campus_authorization::{PolicyCheck, ResourceAction, ResourcePolicy};
use campus_core::{auth_context, AuthContext, AuthzError, ResourceContext, SessionSource};
use tracing::{debug, warn};

/// Authorization context resolved once for a request
///
/// Handlers build one scope from the incoming session and pass it to every
/// guarded call made while serving the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestScope {
    auth: Option<AuthContext>,
}

impl RequestScope {
    /// Resolve the caller from a session
    pub fn resolve(session: &(impl SessionSource + ?Sized)) -> Self {
        let auth = auth_context(session);
        match &auth {
            Some(auth) => debug!(
                user_id = %auth.user_id,
                role = %auth.role,
                bound = auth.school_id.is_some(),
                "Resolved request scope"
            ),
            None => debug!("Resolved anonymous request scope"),
        }
        Self { auth }
    }

    /// Scope for an already resolved context
    pub fn for_context(auth: AuthContext) -> Self {
        Self { auth: Some(auth) }
    }

    /// Scope with no authenticated caller
    pub fn anonymous() -> Self {
        Self { auth: None }
    }

    /// The caller, if any
    pub fn auth(&self) -> Option<&AuthContext> {
        self.auth.as_ref()
    }

    /// The caller, or `Unauthenticated`
    pub fn require_auth(&self) -> Result<&AuthContext, AuthzError> {
        self.auth.as_ref().ok_or_else(|| {
            warn!("Rejected request without an authenticated session");
            AuthzError::Unauthenticated
        })
    }

    /// Assert `action` on `resource` and hand back the caller
    pub fn authorize<A: ResourceAction>(
        &self,
        policy: &ResourcePolicy<A>,
        action: A,
        resource: Option<&ResourceContext>,
    ) -> Result<&AuthContext, AuthzError> {
        let auth = self.require_auth()?;
        let outcome = policy.assert(auth, action, resource);
        trace_outcome(auth, action.as_str(), policy.resource_type(), &outcome);
        outcome.map(|()| auth)
    }

    /// Like [`authorize`](Self::authorize), for callers holding only names
    pub fn authorize_named(
        &self,
        policy: &dyn PolicyCheck,
        action: &str,
        resource: Option<&ResourceContext>,
    ) -> Result<&AuthContext, AuthzError> {
        let auth = self.require_auth()?;
        let outcome = policy.assert_named(auth, action, resource);
        trace_outcome(auth, action, policy.resource_type(), &outcome);
        outcome.map(|()| auth)
    }
}

pub(crate) fn trace_outcome(
    auth: &AuthContext,
    action: &str,
    resource_type: &str,
    outcome: &Result<(), AuthzError>,
) {
    match outcome {
        Ok(()) => debug!(
            user_id = %auth.user_id,
            role = %auth.role,
            action,
            resource_type,
            "Authorization granted"
        ),
        Err(error) => warn!(
            user_id = %auth.user_id,
            role = %auth.role,
            action,
            resource_type,
            error = %error,
            "Authorization denied"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_authorization::resources::{ParentAction, PARENT_POLICY};
    use campus_authorization::ResourceKind;
    use campus_core::{Role, Session, SessionUser};

    #[test]
    fn test_anonymous_scope_is_unauthenticated() {
        let scope = RequestScope::resolve(&Session::anonymous());
        assert_eq!(scope.require_auth(), Err(AuthzError::Unauthenticated));
        let err = scope
            .authorize(&PARENT_POLICY, ParentAction::Read, None)
            .unwrap_err();
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn test_resolve_from_json_session() {
        let session = serde_json::json!({
            "user": {"id": 42, "role": "teacher", "schoolId": "S1"}
        });
        let scope = RequestScope::resolve(&session);
        let auth = scope.require_auth().unwrap();
        assert_eq!(auth.user_id.as_str(), "42");
        assert_eq!(auth.role, Role::Teacher);
    }

    #[test]
    fn test_authorize_returns_caller() {
        let session = Session::for_user(SessionUser {
            id: "T1".into(),
            role: Role::Teacher,
            school_id: Some("S1".into()),
        });
        let scope = RequestScope::resolve(&session);
        let parent = ResourceContext::in_school("S1");

        let auth = scope
            .authorize(&PARENT_POLICY, ParentAction::Read, Some(&parent))
            .unwrap();
        assert_eq!(auth.role, Role::Teacher);
        assert!(scope
            .authorize(&PARENT_POLICY, ParentAction::Delete, Some(&parent))
            .is_err());

        let policy = ResourceKind::Parents.policy();
        assert!(scope.authorize_named(policy, "export", Some(&parent)).is_ok());
        assert!(scope.authorize_named(policy, "purge", Some(&parent)).is_err());
    }
}
