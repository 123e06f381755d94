//! # Campus Authorization - Layer 2: Policy Evaluation
//!
//! Decides whether an actor may perform an action on a tenant-scoped record.
//!
//! - [`permissions`]: the static role to permission matrix
//! - [`policy`]: the generic precedence engine and its rule predicates
//! - [`resources`]: one rule table per protected resource type
//! - [`registry`]: dispatch by resource name for tools and guards
//!
//! Every check is a pure function of its inputs. Nothing here logs, caches
//! or performs I/O; denials surface as `false` or
//! [`AuthzError::Unauthorized`](campus_core::AuthzError).

#![forbid(unsafe_code)]

pub mod permissions;
pub mod policy;
pub mod registry;
pub mod resources;

pub use permissions::{has_permission, permissions_for_role, Permission, PermissionMatrix, PERMISSIONS};
pub use policy::{
    Decision, DecisionReason, Grantee, PolicyCheck, ResourceAction, ResourcePolicy, Rule,
};
pub use registry::{Affordances, ResourceKind};
