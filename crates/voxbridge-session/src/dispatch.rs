// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Function-call dispatch.
//!
//! Routing failures (unknown session, unknown tool) raise; handler failures
//! do not. A failed tool invocation is a normal conversational outcome: it is
//! logged into the interaction record and reported back with `success: false`
//! so the model can explain it to the user.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{error, info};
use voxbridge_core::VoxError;
use voxbridge_tools::{ToolContext, ToolRegistry};

use crate::store::{InteractionRecord, SessionStore};

/// Resolves tool names and invokes handlers on behalf of a session.
pub struct FunctionCallDispatcher {
    store: Arc<SessionStore>,
    registry: Arc<ToolRegistry>,
}

impl FunctionCallDispatcher {
    pub fn new(store: Arc<SessionStore>, registry: Arc<ToolRegistry>) -> Self {
        Self { store, registry }
    }

    /// Dispatches one tool invocation for `session_id`.
    ///
    /// The session's entry lock is held across the handler call, so
    /// interaction records append in invocation order per session.
    pub async fn dispatch(
        &self,
        session_id: &str,
        tool_name: &str,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let entry = self
            .store
            .get(session_id)
            .ok_or_else(|| VoxError::session_not_found(session_id))?;
        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| VoxError::UnsupportedTool {
                name: tool_name.to_string(),
            })?;

        let mut entry = entry.lock().await;
        let ctx = ToolContext {
            session_id: entry.session.id.clone(),
            profile: entry.session.profile.clone(),
        };

        info!(session_id, tool = tool_name, "dispatching function call");

        let (payload, success) = match tool.execute(&ctx, args.clone()).await {
            Ok(result) => (
                json!({
                    "success": true,
                    "tool": tool_name,
                    "result": result,
                }),
                true,
            ),
            Err(e) => {
                error!(session_id, tool = tool_name, error = %e, "function call failed");
                (
                    json!({
                        "success": false,
                        "tool": tool_name,
                        "error": e.to_string(),
                    }),
                    false,
                )
            }
        };

        entry.interactions.push(InteractionRecord {
            tool: tool_name.to_string(),
            args,
            result: payload.clone(),
            success,
            at: Utc::now(),
        });

        Ok(payload)
    }
}
