// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Placeholder tools for integrations that were taken out of service.
//!
//! These stay declarable so profiles that still reference them get a clear
//! in-band explanation instead of an unknown-tool failure.

use async_trait::async_trait;
use serde_json::json;
use voxbridge_core::VoxError;

use crate::tool::{Tool, ToolContext};

fn operation_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "operation": {
                "type": "string",
                "description": "This integration has been disabled"
            }
        },
        "required": ["operation"]
    })
}

fn require_operation(args: &serde_json::Value) -> Result<String, VoxError> {
    match args["operation"].as_str() {
        Some(op) if !op.is_empty() => Ok(op.to_string()),
        _ => Err(VoxError::Validation("operation is required".into())),
    }
}

/// Disabled Google Sheets integration.
pub struct GoogleSheetsTool;

#[async_trait]
impl Tool for GoogleSheetsTool {
    fn name(&self) -> &str {
        "manage_google_sheets"
    }

    fn description(&self) -> &str {
        "Google Sheets integration has been disabled due to OAuth configuration issues"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        operation_schema()
    }

    fn required_integrations(&self) -> &[&str] {
        &["google-sheets"]
    }

    async fn execute(
        &self,
        _ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let operation = require_operation(&args)?;
        Ok(json!({
            "success": false,
            "error": "Google Sheets integration has been disabled - OAuth was incorrectly configured",
            "operation": operation,
        }))
    }
}

/// Disabled Notion integration.
pub struct NotionTool;

#[async_trait]
impl Tool for NotionTool {
    fn name(&self) -> &str {
        "manage_notion"
    }

    fn description(&self) -> &str {
        "Notion integration has been disabled due to OAuth configuration issues"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        operation_schema()
    }

    fn required_integrations(&self) -> &[&str] {
        &["notion-oauth-source", "notion-oauth-action"]
    }

    async fn execute(
        &self,
        _ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let operation = require_operation(&args)?;
        Ok(json!({
            "success": false,
            "error": "Notion integration has been disabled - OAuth was incorrectly configured",
            "operation": operation,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxbridge_core::{SessionId, SubjectProfile};

    fn ctx() -> ToolContext {
        ToolContext {
            session_id: SessionId("voice_session_1_cafebabe".into()),
            profile: SubjectProfile::default(),
        }
    }

    #[tokio::test]
    async fn placeholders_report_disabled_without_failing() {
        for tool in [&GoogleSheetsTool as &dyn Tool, &NotionTool] {
            let result = tool
                .execute(&ctx(), json!({"operation": "read"}))
                .await
                .unwrap();
            assert_eq!(result["success"], false);
            assert!(result["error"].as_str().unwrap().contains("disabled"));
            assert_eq!(result["operation"], "read");
        }
    }

    #[tokio::test]
    async fn missing_operation_is_a_validation_error() {
        let err = GoogleSheetsTool
            .execute(&ctx(), json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::Validation(_)));
    }
}
