//! Resource modules and their actions

use super::to_json;
use crate::config::OutputFormat;
use campus_authorization::ResourceKind;
use serde_json::json;

/// Render every module with its resource type and actions
pub fn render(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => ResourceKind::ALL
            .iter()
            .map(|kind| {
                let policy = kind.policy();
                format!(
                    "{} ({}): {}",
                    kind.as_str(),
                    policy.resource_type(),
                    policy.action_names().join(", ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            let modules: Vec<_> = ResourceKind::ALL
                .iter()
                .map(|kind| {
                    let policy = kind.policy();
                    json!({
                        "module": kind,
                        "resource_type": policy.resource_type(),
                        "actions": policy.action_names(),
                    })
                })
                .collect();
            to_json(&json!(modules))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_banking_actions() {
        let text = render(OutputFormat::Text);
        assert!(text.lines().any(|line| line
            == "banking (bank_account): create, read, update, delete, export, transfer, view_transactions, reconcile"));
    }
}
