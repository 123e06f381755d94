//! Per-module action enumerations

use std::fmt;

/// Closed set of actions a resource module recognizes
///
/// Each module declares its own enum; two modules' `Read` variants are
/// unrelated types. The CRUD and export constants let generic callers (the
/// guard layer, affordance checks) name the common actions.
pub trait ResourceAction:
    Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Every action of the module, in declaration order
    const ALL: &'static [Self];
    /// Create a new record
    const CREATE: Self;
    /// Read one record
    const READ: Self;
    /// Update an existing record
    const UPDATE: Self;
    /// Delete a record
    const DELETE: Self;
    /// Export records in bulk
    const EXPORT: Self;

    /// Wire name of the action
    fn as_str(&self) -> &'static str;

    /// Look up an action by wire name; unknown names yield `None`
    fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|action| action.as_str().eq_ignore_ascii_case(name))
    }
}

/// Declare a module's action enum with its wire names
///
/// Every enum must declare `Create`, `Read`, `Update`, `Delete` and `Export`.
macro_rules! resource_actions {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[allow(missing_docs)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::policy::ResourceAction for $name {
            const ALL: &'static [Self] = &[$( Self::$variant ),+];
            const CREATE: Self = Self::Create;
            const READ: Self = Self::Read;
            const UPDATE: Self = Self::Update;
            const DELETE: Self = Self::Delete;
            const EXPORT: Self = Self::Export;

            fn as_str(&self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::policy::ResourceAction::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::campus_core::CampusError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::policy::ResourceAction>::from_name(s).ok_or_else(|| {
                    ::campus_core::CampusError::invalid(format!(
                        "unknown {} action: {}",
                        stringify!($name),
                        s
                    ))
                })
            }
        }
    };
}

pub(crate) use resource_actions;
