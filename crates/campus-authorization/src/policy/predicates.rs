//! Rule predicates
//!
//! Every predicate receives the caller and the optional target projection.
//! A missing resource means the record does not exist yet (creation).

use campus_core::{AuthContext, ResourceContext, SchoolId};

/// Predicate evaluated once a rule has matched the role and action
pub type Predicate = fn(&AuthContext, Option<&ResourceContext>) -> bool;

/// Action-restricted: allowed whenever the rule matches
pub fn always(_auth: &AuthContext, _resource: Option<&ResourceContext>) -> bool {
    true
}

/// Scoped: the record must carry the caller's school
pub fn same_school(auth: &AuthContext, resource: Option<&ResourceContext>) -> bool {
    match (resource.and_then(|r| r.school_id.as_ref()), auth.school_id.as_ref()) {
        (Some(target), Some(caller)) => target == caller,
        _ => false,
    }
}

/// Elevated: the record is new (the write stamps the caller's school) or in
/// the caller's school
pub fn within_school(auth: &AuthContext, resource: Option<&ResourceContext>) -> bool {
    match resource.and_then(|r| r.school_id.as_ref()) {
        None => auth.school_id.is_some(),
        Some(target) => auth.school_id.as_ref() == Some(target),
    }
}

/// Self-service: the caller owns the record, and the record is not in
/// another school
pub fn owned_by_caller(auth: &AuthContext, resource: Option<&ResourceContext>) -> bool {
    let Some(resource) = resource else {
        return false;
    };
    resource.owner_user_id.as_ref() == Some(&auth.user_id)
        && not_foreign(auth, resource.school_id.as_ref())
}

/// Linked read: the caller is related to the record (e.g. a student's
/// guardian), and the record is not in another school
pub fn linked_to_caller(auth: &AuthContext, resource: Option<&ResourceContext>) -> bool {
    let Some(resource) = resource else {
        return false;
    };
    resource.is_linked(&auth.user_id) && not_foreign(auth, resource.school_id.as_ref())
}

fn not_foreign(auth: &AuthContext, target: Option<&SchoolId>) -> bool {
    match target {
        None => true,
        Some(target) => auth.school_id.as_ref() == Some(target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::Role;

    fn teacher() -> AuthContext {
        AuthContext::new("U1", Role::Teacher, "S1")
    }

    #[test]
    fn test_same_school_requires_present_equal_school() {
        let auth = teacher();
        assert!(same_school(&auth, Some(&ResourceContext::in_school("S1"))));
        assert!(!same_school(&auth, Some(&ResourceContext::in_school("S2"))));
        assert!(!same_school(&auth, Some(&ResourceContext::new())));
        assert!(!same_school(&auth, None));
    }

    #[test]
    fn test_within_school_admits_new_records() {
        let auth = teacher();
        assert!(within_school(&auth, None));
        assert!(within_school(&auth, Some(&ResourceContext::new().with_id("r1"))));
        assert!(within_school(&auth, Some(&ResourceContext::in_school("S1"))));
        assert!(!within_school(&auth, Some(&ResourceContext::in_school("S2"))));

        let unbound = AuthContext::unbound("U1", Role::Teacher);
        assert!(!within_school(&unbound, None));
    }

    #[test]
    fn test_owned_by_caller_needs_owner() {
        let auth = teacher();
        assert!(!owned_by_caller(&auth, None));
        assert!(!owned_by_caller(&auth, Some(&ResourceContext::in_school("S1"))));
        assert!(owned_by_caller(
            &auth,
            Some(&ResourceContext::in_school("S1").with_owner("U1"))
        ));
        assert!(owned_by_caller(&auth, Some(&ResourceContext::new().with_owner("U1"))));
        assert!(!owned_by_caller(
            &auth,
            Some(&ResourceContext::in_school("S2").with_owner("U1"))
        ));
        assert!(!owned_by_caller(
            &auth,
            Some(&ResourceContext::in_school("S1").with_owner("U2"))
        ));
    }

    #[test]
    fn test_linked_to_caller() {
        let auth = AuthContext::new("G1", Role::Guardian, "S1");
        let student = ResourceContext::in_school("S1").with_owner("ST1").with_linked("G1");
        assert!(linked_to_caller(&auth, Some(&student)));
        assert!(!owned_by_caller(&auth, Some(&student)));

        let elsewhere = ResourceContext::in_school("S2").with_linked("G1");
        assert!(!linked_to_caller(&auth, Some(&elsewhere)));
        assert!(!linked_to_caller(&auth, None));
    }
}
