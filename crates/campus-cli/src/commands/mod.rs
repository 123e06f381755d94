//! `campus-authz` subcommands
//!
//! Every command renders its result to a string; `main` prints it.

pub mod affordances;
pub mod check;
pub mod matrix;
pub mod modules;
pub mod permissions;

use crate::config::OutputFormat;
use anyhow::Result;
use clap::Subcommand;

pub use check::CheckArgs;

/// Subcommands of `campus-authz`
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate one request against a resource policy
    Check(CheckArgs),

    /// List the permissions a role holds
    Permissions {
        /// Role name, e.g. ACCOUNTANT
        #[arg(long)]
        role: campus_core::Role,
    },

    /// Print the full permission matrix
    Matrix,

    /// Show create, export and delete affordances of a role in every module
    Affordances {
        /// Role name, e.g. TEACHER
        #[arg(long)]
        role: campus_core::Role,
    },

    /// List resource modules and their actions
    Modules,
}

/// Run a command and render its output
pub fn run(command: &Command, format: OutputFormat) -> Result<String> {
    match command {
        Command::Check(args) => check::run(args, format),
        Command::Permissions { role } => Ok(permissions::render(*role, format)),
        Command::Matrix => Ok(matrix::render(format)),
        Command::Affordances { role } => Ok(affordances::render(*role, format)),
        Command::Modules => Ok(modules::render(format)),
    }
}

pub(crate) fn to_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
