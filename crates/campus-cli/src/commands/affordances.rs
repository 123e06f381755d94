//! Role-only affordances across modules

use super::to_json;
use crate::config::OutputFormat;
use campus_authorization::ResourceKind;
use campus_core::Role;
use serde_json::json;

fn mark(allowed: bool) -> &'static str {
    if allowed {
        "yes"
    } else {
        "no"
    }
}

/// Render the affordance table of `role`
pub fn render(role: Role, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut lines = vec![format!("{:<14} {:<7} {:<7} delete", "module", "create", "export")];
            for kind in ResourceKind::ALL {
                let a = kind.affordances(role);
                lines.push(format!(
                    "{:<14} {:<7} {:<7} {}",
                    kind.as_str(),
                    mark(a.create),
                    mark(a.export),
                    mark(a.delete)
                ));
            }
            lines.join("\n")
        }
        OutputFormat::Json => {
            let modules: Vec<_> = ResourceKind::ALL
                .iter()
                .map(|kind| json!({ "module": kind, "affordances": kind.affordances(role) }))
                .collect();
            to_json(&json!({ "role": role, "modules": modules }))
        }
    }
}
