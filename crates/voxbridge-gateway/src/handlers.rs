// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the voice session and AI APIs.

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use voxbridge_core::{ChatTurn, SubjectProfile, VoxError};
use voxbridge_orchestrator::{ChatMessage, DocumentInfo};
use voxbridge_session::SessionDescriptor;

use crate::auth::Principal;
use crate::error::ApiError;
use crate::server::GatewayState;

/// Request body for POST /v1/voice/sessions.
#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    /// The persona this session speaks as.
    pub contact: SubjectProfile,
}

/// Request body for POST /v1/voice/sessions/{id}/function-call.
#[derive(Debug, Deserialize)]
pub struct FunctionCallRequest {
    /// Tool name requested by the realtime connection.
    pub name: String,
    /// Parsed tool arguments.
    #[serde(default)]
    pub args: serde_json::Value,
}

/// Response body for POST /v1/voice/sessions/{id}/end.
#[derive(Debug, Serialize)]
pub struct EndSessionResponse {
    pub session_id: String,
    pub duration_seconds: u64,
    pub status: String,
}

/// Request body for POST /v1/ai/generate-response.
#[derive(Debug, Deserialize)]
pub struct GenerateResponseRequest {
    pub contact: SubjectProfile,
    pub message: String,
    #[serde(default)]
    pub chat_history: Vec<ChatMessage>,
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
}

/// Request body for POST /v1/ai/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatTurn>,
}

/// Response body carrying a generated reply.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    pub response: String,
}

/// Request body for POST /v1/ai/summarize-document.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub content: String,
    pub filename: String,
}

/// Response body for POST /v1/ai/summarize-document.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub summary: String,
}

/// One entry in GET /v1/ai/models.
#[derive(Debug, Serialize)]
pub struct ModelInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
}

/// POST /v1/voice/sessions
pub async fn create_session(
    State(state): State<GatewayState>,
    Extension(principal): Extension<Principal>,
    Json(body): Json<CreateSessionRequest>,
) -> Result<Json<SessionDescriptor>, ApiError> {
    let descriptor = state.manager.create(&principal.0, body.contact)?;
    Ok(Json(descriptor))
}

/// POST /v1/voice/sessions/{id}/function-call
pub async fn function_call(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
    Json(body): Json<FunctionCallRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if body.name.trim().is_empty() {
        return Err(VoxError::Validation("tool name must not be empty".into()).into());
    }
    let result = state.dispatcher.dispatch(&id, &body.name, body.args).await?;
    Ok(Json(result))
}

/// GET /v1/voice/sessions/{id}/context
pub async fn get_context(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<voxbridge_session::SessionContext>, ApiError> {
    let context = state.manager.get_context(&id).await?;
    Ok(Json(context))
}

/// POST /v1/voice/sessions/{id}/end
pub async fn end_session(
    State(state): State<GatewayState>,
    Path(id): Path<String>,
) -> Result<Json<EndSessionResponse>, ApiError> {
    let duration_seconds = state.manager.end(&id).await?;
    Ok(Json(EndSessionResponse {
        session_id: id,
        duration_seconds,
        status: "ended".into(),
    }))
}

/// POST /v1/ai/generate-response
pub async fn generate_response(
    State(state): State<GatewayState>,
    Json(body): Json<GenerateResponseRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let response = state
        .generator
        .generate_reply(&body.contact, &body.message, &body.chat_history, &body.documents)
        .await?;
    Ok(Json(ReplyResponse { response }))
}

/// POST /v1/ai/chat
pub async fn chat(
    State(state): State<GatewayState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ReplyResponse>, ApiError> {
    let response = state
        .orchestrator
        .respond(&body.session_id, &body.history, &body.message)
        .await?;
    Ok(Json(ReplyResponse { response }))
}

/// POST /v1/ai/summarize-document
///
/// Never fails on provider errors: the summary degrades to a placeholder so
/// the caller's upload flow stays successful.
pub async fn summarize_document(
    State(state): State<GatewayState>,
    Json(body): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    if body.filename.trim().is_empty() {
        return Err(VoxError::Validation("filename must not be empty".into()).into());
    }
    let summary = state
        .generator
        .summarize_document(&body.content, &body.filename)
        .await;
    Ok(Json(SummarizeResponse { summary }))
}

/// GET /v1/ai/models
pub async fn list_models() -> Json<Vec<ModelInfo>> {
    Json(vec![ModelInfo {
        id: "gemini-1.5-flash",
        name: "Gemini 1.5 Flash",
        description: "Fast multimodal model used for chat, voice, and summarization",
    }])
}

/// GET /health (public)
pub async fn health(State(state): State<GatewayState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_session_request_accepts_frontend_shape() {
        let json = r#"{
            "contact": {
                "name": "Ava",
                "description": "a helpful assistant",
                "integrations": [
                    {"integrationId": "api-request-tool", "config": {"enabled": true}}
                ]
            }
        }"#;
        let request: CreateSessionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.contact.name, "Ava");
        assert_eq!(request.contact.integrations.len(), 1);
    }

    #[test]
    fn function_call_request_defaults_args_to_null() {
        let request: FunctionCallRequest =
            serde_json::from_str(r#"{"name": "search_web"}"#).unwrap();
        assert_eq!(request.name, "search_web");
        assert!(request.args.is_null());
    }

    #[test]
    fn chat_request_defaults_history_to_empty() {
        let request: ChatRequest =
            serde_json::from_str(r#"{"session_id": "s", "message": "hi"}"#).unwrap();
        assert!(request.history.is_empty());
    }

    #[test]
    fn end_session_response_serializes() {
        let response = EndSessionResponse {
            session_id: "voice_session_1_abc".into(),
            duration_seconds: 42,
            status: "ended".into(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["duration_seconds"], 42);
        assert_eq!(json["status"], "ended");
    }
}
