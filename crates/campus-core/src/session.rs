//! Session resolution
//!
//! The session provider is upstream and opaque. Anything that can expose a
//! [`SessionUser`] implements [`SessionSource`]; [`auth_context`] projects it
//! into an [`AuthContext`]. Resolution is total: malformed or missing data
//! yields `None` (unauthenticated) or `Role::Unrecognized` (denied by every
//! policy), never a panic or an error.

use crate::context::AuthContext;
use crate::identifiers::{SchoolId, UserId};
use crate::role::Role;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// User portion of an authenticated session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    /// Account identifier
    pub id: UserId,
    /// Role as issued by the session provider
    #[serde(default = "unrecognized", deserialize_with = "lenient_role")]
    pub role: Role,
    /// Tenant binding
    #[serde(default, alias = "school_id")]
    pub school_id: Option<SchoolId>,
}

/// Typed session as produced by the session provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Authenticated user, absent for anonymous sessions
    #[serde(default)]
    pub user: Option<SessionUser>,
}

impl Session {
    /// Anonymous session
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Session for an authenticated user
    pub fn for_user(user: SessionUser) -> Self {
        Self { user: Some(user) }
    }
}

/// Anything a request can carry that describes the signed-in user
pub trait SessionSource {
    /// The signed-in user, or `None` for anonymous requests
    fn session_user(&self) -> Option<SessionUser>;
}

impl SessionSource for Session {
    fn session_user(&self) -> Option<SessionUser> {
        self.user.clone()
    }
}

impl SessionSource for Option<Session> {
    fn session_user(&self) -> Option<SessionUser> {
        self.as_ref().and_then(Session::session_user)
    }
}

/// Duck-typed JSON sessions: `{"user": {"id", "role", "schoolId"}}`
impl SessionSource for Value {
    fn session_user(&self) -> Option<SessionUser> {
        let user = self.get("user")?.as_object()?;
        let id = scalar_string(user.get("id")?)?;
        let role = user
            .get("role")
            .and_then(Value::as_str)
            .map_or(Role::Unrecognized, Role::parse_lenient);
        let school_id = user
            .get("schoolId")
            .or_else(|| user.get("school_id"))
            .and_then(scalar_string)
            .map(SchoolId::from);

        Some(SessionUser {
            id: UserId::from(id),
            role,
            school_id,
        })
    }
}

impl<T: SessionSource + ?Sized> SessionSource for &T {
    fn session_user(&self) -> Option<SessionUser> {
        (**self).session_user()
    }
}

/// Project a session into the authorization context for one request
///
/// Returns `None` when the session carries no user; every downstream check
/// must then deny.
pub fn auth_context(session: &(impl SessionSource + ?Sized)) -> Option<AuthContext> {
    session.session_user().map(|user| AuthContext {
        user_id: user.id,
        role: user.role,
        school_id: user.school_id,
    })
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn unrecognized() -> Role {
    Role::Unrecognized
}

fn lenient_role<'de, D>(deserializer: D) -> Result<Role, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().map_or(Role::Unrecognized, Role::parse_lenient))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_user_is_unauthenticated() {
        assert_eq!(auth_context(&Session::anonymous()), None);
        assert_eq!(auth_context(&json!({})), None);
        assert_eq!(auth_context(&json!({ "user": null })), None);
        assert_eq!(auth_context(&json!({ "user": "U1" })), None);
        assert_eq!(auth_context(&json!({ "user": { "role": "ADMIN" } })), None);
    }

    #[test]
    fn test_projects_user_fields() {
        let session = json!({
            "user": { "id": "U1", "role": "TEACHER", "schoolId": "S1", "name": "ignored" },
            "expires": "2030-01-01"
        });
        let auth = auth_context(&session).unwrap();
        assert_eq!(auth, AuthContext::new("U1", Role::Teacher, "S1"));
    }

    #[test]
    fn test_missing_school_resolves_to_none() {
        let auth = auth_context(&json!({ "user": { "id": 7, "role": "developer" } })).unwrap();
        assert_eq!(auth.user_id, UserId::from("7"));
        assert_eq!(auth.role, Role::Developer);
        assert_eq!(auth.school_id, None);

        let auth =
            auth_context(&json!({ "user": { "id": "U1", "role": "STAFF", "schoolId": null } }))
                .unwrap();
        assert_eq!(auth.school_id, None);
    }

    #[test]
    fn test_unknown_or_missing_role_is_unrecognized() {
        let auth = auth_context(&json!({ "user": { "id": "U1", "role": "JANITOR" } })).unwrap();
        assert_eq!(auth.role, Role::Unrecognized);

        let auth = auth_context(&json!({ "user": { "id": "U1", "role": 3 } })).unwrap();
        assert_eq!(auth.role, Role::Unrecognized);
    }

    #[test]
    fn test_typed_session_deserializes_both_spellings() {
        let session: Session =
            serde_json::from_str(r#"{"user":{"id":"U1","role":"guardian","school_id":"S9"}}"#)
                .unwrap();
        let auth = auth_context(&session).unwrap();
        assert_eq!(auth.role, Role::Guardian);
        assert_eq!(auth.school_id, Some(SchoolId::from("S9")));

        let session: Session = serde_json::from_str(r#"{"user":{"id":"U2"}}"#).unwrap();
        assert_eq!(auth_context(&session).unwrap().role, Role::Unrecognized);
    }
}
