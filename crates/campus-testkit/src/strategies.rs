//! Property test strategies for Campus types
//!
//! Identifiers are drawn from small pools so generated actors and records
//! collide often enough to exercise ownership and tenant matches.

use campus_authorization::ResourceKind;
use campus_core::{AuthContext, ResourceContext, ResourceId, Role, SchoolId, UserId};
use proptest::prelude::*;
use proptest::sample::select;

// Re-export proptest for convenience
pub use proptest;

/// Any role, the catch-all included
pub fn arb_role() -> impl Strategy<Value = Role> {
    select(Role::ALL.to_vec())
}

/// Any role except the global operator
pub fn arb_tenant_role() -> impl Strategy<Value = Role> {
    arb_role().prop_filter("global role", |role| !role.is_global())
}

/// School ids `S0` to `S3`
pub fn arb_school_id() -> impl Strategy<Value = SchoolId> {
    (0u8..4).prop_map(|n| SchoolId::from(format!("S{n}")))
}

/// User ids `U0` to `U5`
pub fn arb_user_id() -> impl Strategy<Value = UserId> {
    (0u8..6).prop_map(|n| UserId::from(format!("U{n}")))
}

/// Actor with any role and an optional school
pub fn arb_auth_context() -> impl Strategy<Value = AuthContext> {
    (arb_user_id(), arb_role(), proptest::option::of(arb_school_id())).prop_map(
        |(user_id, role, school_id)| AuthContext {
            user_id,
            role,
            school_id,
        },
    )
}

/// Actor with the given role bound to the given school
pub fn arb_actor_in(role: Role, school: SchoolId) -> impl Strategy<Value = AuthContext> {
    arb_user_id().prop_map(move |user_id| AuthContext {
        user_id,
        role,
        school_id: Some(school.clone()),
    })
}

/// Record projection with every field optional
pub fn arb_resource_context() -> impl Strategy<Value = ResourceContext> {
    (
        proptest::option::of((0u16..100).prop_map(|n| ResourceId::from(format!("r{n}")))),
        proptest::option::of(arb_school_id()),
        proptest::option::of(arb_user_id()),
        proptest::collection::vec(arb_user_id(), 0..3),
    )
        .prop_map(|(id, school_id, owner_user_id, linked_user_ids)| ResourceContext {
            id,
            school_id,
            owner_user_id,
            linked_user_ids,
        })
}

/// Record projection pinned to `school`, other fields arbitrary
pub fn arb_resource_in(school: SchoolId) -> impl Strategy<Value = ResourceContext> {
    arb_resource_context().prop_map(move |resource| ResourceContext {
        school_id: Some(school.clone()),
        ..resource
    })
}

/// Any resource module
pub fn arb_resource_kind() -> impl Strategy<Value = ResourceKind> {
    select(ResourceKind::ALL.to_vec())
}

/// A resource module with one of its own action names
pub fn arb_kind_and_action() -> impl Strategy<Value = (ResourceKind, &'static str)> {
    arb_resource_kind().prop_flat_map(|kind| (Just(kind), select(kind.policy().action_names())))
}
