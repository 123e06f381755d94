//! Ready-made actors and resource projections

use crate::store::TestRecord;
use campus_core::{AuthContext, ResourceContext, Role, SchoolId};

/// Home school of most fixtures
pub const SCHOOL_A: &str = "S1";

/// A second, unrelated school
pub const SCHOOL_B: &str = "S2";

/// Actor bound to `school`
pub fn actor(user: &str, role: Role, school: &str) -> AuthContext {
    AuthContext::new(user, role, school)
}

/// Actor with no tenant binding
pub fn unbound_actor(user: &str, role: Role) -> AuthContext {
    AuthContext::unbound(user, role)
}

/// One actor per role, all bound to `school`; user ids are `<ROLE>-1`
pub fn every_role_in(school: &str) -> Vec<AuthContext> {
    Role::ALL
        .iter()
        .map(|role| actor(&format!("{role}-1"), *role, school))
        .collect()
}

/// Projection of an existing record in `school`
pub fn resource_in(school: &str) -> ResourceContext {
    ResourceContext::in_school(school)
}

/// Stored record in `school` with a fresh id
pub fn record_in(school: &str) -> TestRecord {
    TestRecord::new().in_school(SchoolId::from(school))
}
