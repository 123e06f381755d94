//! Opaque identifiers for users, schools and protected records
//!
//! Identifiers are issued upstream (session provider, persistence layer) and
//! are only ever compared for equality here, so they wrap the upstream string
//! form without interpreting it.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create from any string-like value
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Borrow the upstream string form
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

string_identifier!(
    /// Account identifier, unique across the whole system
    UserId
);

string_identifier!(
    /// Tenant identifier: one school instance
    SchoolId
);

string_identifier!(
    /// Identifier of a protected record (parent, staff member, invoice, ...)
    ResourceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_equality_is_exact() {
        assert_eq!(SchoolId::from("S1"), SchoolId::new(String::from("S1")));
        assert_ne!(SchoolId::from("S1"), SchoolId::from("s1"));
        assert_ne!(SchoolId::from("S1"), SchoolId::from("S1 "));
    }

    #[test]
    fn test_identifier_serializes_transparently() {
        let id = UserId::from("U1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"U1\"");
        let back: UserId = serde_json::from_str("\"U1\"").unwrap();
        assert_eq!(back, id);
    }
}
