//! Guard configuration.

use serde::{Deserialize, Serialize};

/// Behavior switches for [`GuardedStore`](crate::GuardedStore)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardConfig {
    /// Report a denied read or write of an existing record as not found, so
    /// unauthorized callers cannot tell whether it exists
    pub conceal_existence: bool,
}

impl GuardConfig {
    /// Configuration that hides denied records behind not-found
    pub fn concealing() -> Self {
        Self {
            conceal_existence: true,
        }
    }
}
