//! Generic policy engine shared by every resource module

mod actions;
mod engine;
pub mod predicates;

pub(crate) use actions::resource_actions;
pub use actions::ResourceAction;
pub use engine::{Decision, DecisionReason, Grantee, PolicyCheck, ResourcePolicy, Rule};
pub use predicates::Predicate;
