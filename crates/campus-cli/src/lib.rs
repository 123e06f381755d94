//! Campus authorization CLI
//!
//! Library half of the `campus-authz` binary: configuration and the command
//! implementations, kept here so they can be tested without spawning the
//! binary.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;

pub use config::{CliConfig, CliOverrides, OutputFormat};
