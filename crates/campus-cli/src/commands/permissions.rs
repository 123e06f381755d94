//! Permissions held by one role

use super::to_json;
use crate::config::OutputFormat;
use campus_authorization::permissions_for_role;
use campus_core::Role;
use serde_json::json;

/// Render the permissions held by `role`
pub fn render(role: Role, format: OutputFormat) -> String {
    let held = permissions_for_role(role);
    match format {
        OutputFormat::Text if held.is_empty() => format!("{role} holds no permissions"),
        OutputFormat::Text => held
            .iter()
            .map(|permission| permission.as_str())
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => to_json(&json!({ "role": role, "permissions": held })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_permissions_in_order() {
        let text = render(Role::Principal, OutputFormat::Text);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.first(), Some(&"VIEW_ALL_ACCOUNTS"));
        assert_eq!(lines.last(), Some(&"VIEW_TIMESHEETS"));
        assert_eq!(lines.len(), 6);
    }

    #[test]
    fn test_json_output() {
        let value: serde_json::Value =
            serde_json::from_str(&render(Role::Guardian, OutputFormat::Json)).unwrap();
        assert_eq!(value["role"], "GUARDIAN");
        assert_eq!(value["permissions"], json!([]));
    }
}
