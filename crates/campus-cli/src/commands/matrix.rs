//! Full permission matrix

use super::to_json;
use crate::config::OutputFormat;
use campus_authorization::{Permission, PERMISSIONS};
use serde_json::json;

/// Render the matrix, one permission per line
pub fn render(format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let width = Permission::ALL
                .iter()
                .map(|permission| permission.as_str().len())
                .max()
                .unwrap_or(0);
            PERMISSIONS
                .iter()
                .map(|(permission, roles)| {
                    let roles = roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", ");
                    format!("{:<width$}  {roles}", permission.as_str())
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        OutputFormat::Json => {
            let entries: Vec<_> = PERMISSIONS
                .iter()
                .map(|(permission, roles)| json!({ "permission": permission, "roles": roles }))
                .collect();
            to_json(&json!(entries))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_lists_every_permission() {
        let text = render(OutputFormat::Text);
        assert_eq!(text.lines().count(), 17);
        assert!(text.lines().any(|line| line.starts_with("MANAGE_SCHOOLS") && line.ends_with("DEVELOPER")));
    }

    #[test]
    fn test_matrix_json_keeps_declaration_order() {
        let value: serde_json::Value = serde_json::from_str(&render(OutputFormat::Json)).unwrap();
        assert_eq!(value[0]["permission"], "VIEW_ALL_ACCOUNTS");
        assert_eq!(value[16]["permission"], "VIEW_AUDIT_LOGS");
        assert_eq!(value[16]["roles"], json!(["DEVELOPER", "ADMIN"]));
    }
}
