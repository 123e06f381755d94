//! Campus Core - foundation types for tenant-scoped authorization
//!
//! Everything an authorization decision consumes lives here:
//!
//! - identifiers (`UserId`, `SchoolId`, `ResourceId`), opaque and compared
//!   by exact equality
//! - the closed [`Role`] enumeration
//! - [`AuthContext`] (who is acting) and [`ResourceContext`] (the minimal
//!   projection of the record acted on)
//! - session resolution through [`SessionSource`] and [`auth_context`]
//! - [`AuthzError`] and the general [`CampusError`]
//!
//! The crate performs no I/O beyond configuration loading and holds no
//! shared mutable state.

#![forbid(unsafe_code)]

/// Request-scoped actor and resource contexts
pub mod context;

/// Unified error handling
pub mod errors;

/// Opaque identifiers
pub mod identifiers;

/// Actor roles
pub mod role;

/// Session projection into an `AuthContext`
pub mod session;

/// Configuration traits and validation
pub mod config;

pub use context::{AuthContext, ResourceContext};
pub use errors::{AuthzError, CampusError, Result};
pub use identifiers::{ResourceId, SchoolId, UserId};
pub use role::{Role, UnknownRole};
pub use session::{auth_context, Session, SessionSource, SessionUser};
