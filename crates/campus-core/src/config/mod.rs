//! Configuration traits and validation shared by Campus tools

pub mod traits;
pub mod validation;

pub use traits::{CampusConfig, ConfigMerge, ConfigValidation};
pub use validation::{ConfigValidator, ValidationError};
