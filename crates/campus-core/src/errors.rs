//! Unified error system for Campus
//!
//! Two types cover the workspace. [`AuthzError`] is the narrow result of an
//! authorization decision and is what policy modules return. [`CampusError`]
//! is the general error the guard layer and tools propagate; an
//! `AuthzError` converts into `CampusError::PermissionDenied` with its
//! message intact so callers can still tell a denial apart from a missing
//! record or a validation failure.

use crate::identifiers::ResourceId;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Outcome of a failed authorization decision
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum AuthzError {
    /// No authenticated actor for the request
    #[error("Unauthenticated: no active session")]
    Unauthenticated,

    /// The actor is authenticated but may not perform the action
    #[error(
        "Unauthorized: {role} cannot {action} {resource_type}{}",
        .resource_id.as_ref().map(|id| format!(" {id}")).unwrap_or_default()
    )]
    Unauthorized {
        /// Role of the denied actor
        role: Role,
        /// Action name as requested
        action: String,
        /// Resource type the policy protects
        resource_type: String,
        /// Identifier of the target record, when one exists
        resource_id: Option<ResourceId>,
    },
}

impl AuthzError {
    /// Create an unauthorized error for a role, action and resource
    pub fn unauthorized(
        role: Role,
        action: impl Into<String>,
        resource_type: impl Into<String>,
        resource_id: Option<ResourceId>,
    ) -> Self {
        Self::Unauthorized {
            role,
            action: action.into(),
            resource_type: resource_type.into(),
            resource_id,
        }
    }

    /// Whether this error reports a missing session rather than a denial
    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, Self::Unauthenticated)
    }
}

/// General error type for Campus operations
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
pub enum CampusError {
    /// Invalid input
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Authentication missing or authorization denied
    #[error("Permission denied: {source}")]
    PermissionDenied {
        /// The underlying authorization failure
        source: AuthzError,
    },

    /// Record store failure
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl CampusError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// The authorization failure behind this error, if it is one
    pub fn authz(&self) -> Option<&AuthzError> {
        match self {
            Self::PermissionDenied { source } => Some(source),
            _ => None,
        }
    }

    /// Whether this error is a not-found
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<AuthzError> for CampusError {
    fn from(err: AuthzError) -> Self {
        Self::PermissionDenied { source: err }
    }
}

impl From<std::io::Error> for CampusError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            _ => Self::internal(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for CampusError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid(err.to_string())
    }
}

/// Standard Result type for Campus operations
pub type Result<T> = std::result::Result<T, CampusError>;
