#![forbid(unsafe_code)]
//! # Campus Guards - Layer 3: Request Enforcement
//!
//! Wraps record stores so that every read and write is authorized against
//! the caller's context before the store is touched. The context is resolved
//! once per request ([`RequestScope`]); the record snapshot used for the
//! decision is fetched by the guard itself.

pub mod config;
pub mod scope;
pub mod store;

pub use config::GuardConfig;
pub use scope::RequestScope;
pub use store::{GuardedStore, RecordStore, TenantScoped};
