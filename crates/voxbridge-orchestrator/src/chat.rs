// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Two-phase tool-calling completion for voice sessions.
//!
//! Phase 1 proposes: conversation window plus the session's frozen tool
//! schemas go to the model. If the candidate requests tool calls and a round
//! remains, phase 2 executes them through the dispatcher and re-sends the
//! extended conversation. The round limit is an explicit parameter, default 1.

use std::sync::Arc;

use tracing::{debug, info, warn};
use voxbridge_core::{
    ChatRole, ChatTurn, CompletionProvider, CompletionRequest, SamplingConfig, TurnPart,
    VoxError,
};
use voxbridge_session::{FunctionCallDispatcher, SessionStore};

/// Returned when a follow-up completion produced no usable text.
pub const FALLBACK_REPLY: &str =
    "I'm sorry, I wasn't able to finish that request. Could you try asking again?";

/// Drives session-scoped completions with bounded tool execution.
pub struct ChatOrchestrator {
    provider: Arc<dyn CompletionProvider>,
    store: Arc<SessionStore>,
    dispatcher: Arc<FunctionCallDispatcher>,
    max_tool_rounds: u32,
    history_window: usize,
}

impl ChatOrchestrator {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        store: Arc<SessionStore>,
        dispatcher: Arc<FunctionCallDispatcher>,
        max_tool_rounds: u32,
        history_window: usize,
    ) -> Self {
        Self {
            provider,
            store,
            dispatcher,
            max_tool_rounds,
            history_window,
        }
    }

    /// Produces the assistant's reply to `user_message` within a session.
    pub async fn respond(
        &self,
        session_id: &str,
        history: &[ChatTurn],
        user_message: &str,
    ) -> Result<String, VoxError> {
        if user_message.trim().is_empty() {
            return Err(VoxError::Validation("message must not be empty".into()));
        }

        let (system, tools) = {
            let entry = self
                .store
                .get(session_id)
                .ok_or_else(|| VoxError::session_not_found(session_id))?;
            let entry = entry.lock().await;
            (
                entry.session.system_prompt.clone(),
                entry.session.tool_schemas.clone(),
            )
        };

        let window_start = history.len().saturating_sub(self.history_window);
        let mut turns: Vec<ChatTurn> = history[window_start..].to_vec();
        turns.push(ChatTurn::user(user_message));

        let mut rounds_used = 0u32;
        loop {
            let response = self
                .provider
                .complete(CompletionRequest {
                    system: Some(system.clone()),
                    turns: turns.clone(),
                    tools: tools.clone(),
                    sampling: SamplingConfig::conversational(),
                })
                .await?;

            let Some(candidate) = response.primary() else {
                return Err(VoxError::EmptyResponse);
            };
            if candidate.parts.is_empty() {
                if rounds_used == 0 {
                    return Err(VoxError::EmptyResponse);
                }
                warn!(session_id, "follow-up completion had no parts");
                return Ok(FALLBACK_REPLY.to_string());
            }

            let calls: Vec<(String, serde_json::Value)> = candidate
                .function_calls()
                .into_iter()
                .map(|(name, args)| (name.to_string(), args.clone()))
                .collect();

            if calls.is_empty() || rounds_used >= self.max_tool_rounds {
                let text = candidate.text();
                if text.is_empty() && rounds_used > 0 {
                    warn!(session_id, "follow-up completion had no text");
                    return Ok(FALLBACK_REPLY.to_string());
                }
                return Ok(text);
            }

            info!(
                session_id,
                round = rounds_used + 1,
                calls = calls.len(),
                "executing requested tool calls"
            );

            let mut result_parts = Vec::with_capacity(calls.len());
            for (name, args) in &calls {
                let result = match self.dispatcher.dispatch(session_id, name, args.clone()).await
                {
                    Ok(payload) => payload,
                    // The model asked for a tool this session does not know;
                    // report it in-band so the conversation can continue.
                    Err(VoxError::UnsupportedTool { name }) => serde_json::json!({
                        "success": false,
                        "tool": name,
                        "error": format!("unsupported tool: {name}"),
                    }),
                    Err(e) => return Err(e),
                };
                debug!(session_id, tool = name, "collected tool result");
                result_parts.push(TurnPart::FunctionResult {
                    name: name.clone(),
                    result,
                });
            }

            turns.push(ChatTurn {
                role: ChatRole::Model,
                parts: candidate.parts.clone(),
            });
            turns.push(ChatTurn {
                role: ChatRole::Tool,
                parts: result_parts,
            });
            rounds_used += 1;
        }
    }
}
