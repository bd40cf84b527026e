// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook trigger tool, gated behind the `webhook-trigger` integration.

use async_trait::async_trait;
use serde_json::json;
use voxbridge_core::VoxError;
use voxbridge_integrations::WebhookSender;

use crate::tool::{Tool, ToolContext};

/// Fires the configured webhook with a natural-language action.
///
/// Without a configured sender the tool still resolves but reports that
/// configuration is missing, so the model can tell the user.
pub struct TriggerWebhookTool {
    sender: Option<WebhookSender>,
}

impl TriggerWebhookTool {
    pub fn new(sender: Option<WebhookSender>) -> Self {
        Self { sender }
    }
}

#[async_trait]
impl Tool for TriggerWebhookTool {
    fn name(&self) -> &str {
        "trigger_webhook"
    }

    fn description(&self) -> &str {
        "Trigger a webhook based on natural language commands. Use when user asks to activate, \
         trigger, start, launch, or execute something."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "action": {
                    "type": "string",
                    "description": "The action the user wants to perform (e.g., 'activate marketing', 'trigger workflow', 'send notification')"
                }
            },
            "required": ["action"]
        })
    }

    fn required_integrations(&self) -> &[&str] {
        &["webhook-trigger"]
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let action = args["action"].as_str().unwrap_or_default();
        if action.is_empty() {
            return Err(VoxError::Validation(
                "action is required for webhook trigger".into(),
            ));
        }

        let Some(sender) = &self.sender else {
            return Ok(json!({
                "success": false,
                "action": action,
                "error": "webhook URL is not configured for this deployment",
            }));
        };

        let status = sender
            .trigger(action, json!({"session_id": ctx.session_id.to_string()}))
            .await?;

        Ok(json!({
            "success": true,
            "action": action,
            "status": status,
        }))
    }
}
