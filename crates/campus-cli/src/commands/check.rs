//! Evaluate one request offline
//!
//! Reads a session document and an optional record projection from JSON
//! files and reports what the matching resource policy decides.

use super::to_json;
use crate::config::OutputFormat;
use anyhow::{bail, Context, Result};
use campus_authorization::{DecisionReason, ResourceKind};
use campus_core::{auth_context, AuthzError, ResourceContext};
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments of `campus-authz check`
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON session document (`{"user": {"id", "role", "schoolId"}}`)
    #[arg(long)]
    pub session: PathBuf,

    /// Module name or resource type, e.g. `parents` or `bank_account`
    #[arg(long)]
    pub resource: String,

    /// Action name, e.g. `read`
    #[arg(long)]
    pub action: String,

    /// JSON record projection; omit to check a creation
    #[arg(long)]
    pub target: Option<PathBuf>,

    /// Exit with an error when the request is denied
    #[arg(long)]
    pub assert: bool,
}

/// Result of one offline check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Whether access is allowed
    pub allowed: bool,
    /// Deciding step; absent for anonymous sessions
    pub reason: Option<DecisionReason>,
    /// Denial message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Decide `action` on `target` for the caller described by `session`
pub fn evaluate(
    session: &Value,
    kind: ResourceKind,
    action: &str,
    target: Option<&ResourceContext>,
) -> CheckOutcome {
    let Some(auth) = auth_context(session) else {
        return CheckOutcome {
            allowed: false,
            reason: None,
            message: Some(AuthzError::Unauthenticated.to_string()),
        };
    };

    let policy = kind.policy();
    let decision = policy.explain_named(&auth, action, target);
    let message = policy
        .assert_named(&auth, action, target)
        .err()
        .map(|error| error.to_string());
    info!(
        role = %auth.role,
        action,
        resource_type = policy.resource_type(),
        allowed = decision.allowed,
        "Evaluated request"
    );
    CheckOutcome {
        allowed: decision.allowed,
        reason: Some(decision.reason),
        message,
    }
}

/// Render an outcome as `allow`, `deny: <message>` or JSON
pub fn render(outcome: &CheckOutcome, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text if outcome.allowed => "allow".to_string(),
        OutputFormat::Text => format!(
            "deny: {}",
            outcome.message.as_deref().unwrap_or("no matching rule")
        ),
        OutputFormat::Json => match serde_json::to_value(outcome) {
            Ok(value) => to_json(&value),
            Err(_) => format!("{{\"allowed\": {}}}", outcome.allowed),
        },
    }
}

fn read_json(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub(crate) fn run(args: &CheckArgs, format: OutputFormat) -> Result<String> {
    let kind: ResourceKind = args.resource.parse()?;
    let session = read_json(&args.session)?;
    let target = match &args.target {
        Some(path) => Some(
            serde_json::from_value::<ResourceContext>(read_json(path)?)
                .with_context(|| format!("invalid record projection in {}", path.display()))?,
        ),
        None => None,
    };

    let outcome = evaluate(&session, kind, &args.action, target.as_ref());
    if args.assert && !outcome.allowed {
        bail!(outcome
            .message
            .unwrap_or_else(|| "request denied".to_string()));
    }
    Ok(render(&outcome, format))
}
