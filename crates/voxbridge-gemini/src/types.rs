// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini `generateContent` request/response wire types.
//!
//! A wire [`WirePart`] is an object carrying exactly one of `text`,
//! `functionCall`, or `functionResponse`; it is modelled as a struct of
//! options rather than an enum because the API occasionally adds sibling
//! fields (e.g. `thought`) that must not break deserialization.

use serde::{Deserialize, Serialize};

/// A request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Ordered conversation contents.
    pub contents: Vec<WireContent>,

    /// System instruction, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<WireSystemInstruction>,

    /// Tool declarations available to the model.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<WireTools>>,

    /// Sampling configuration.
    pub generation_config: WireGenerationConfig,

    /// Safety thresholds.
    pub safety_settings: Vec<WireSafetySetting>,
}

/// One content entry: a role plus ordered parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireContent {
    /// "user" or "model".
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub parts: Vec<WirePart>,
}

/// System instruction wrapper (role is implicit).
#[derive(Debug, Clone, Serialize)]
pub struct WireSystemInstruction {
    pub parts: Vec<WirePart>,
}

/// One part of a content entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WirePart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<WireFunctionCall>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_response: Option<WireFunctionResponse>,
}

impl WirePart {
    /// A plain text part.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// A function-call request part.
    pub fn function_call(name: impl Into<String>, args: serde_json::Value) -> Self {
        Self {
            function_call: Some(WireFunctionCall {
                name: name.into(),
                args,
            }),
            ..Self::default()
        }
    }

    /// A function-response part carrying a tool result back to the model.
    pub fn function_response(name: impl Into<String>, response: serde_json::Value) -> Self {
        Self {
            function_response: Some(WireFunctionResponse {
                name: name.into(),
                response,
            }),
            ..Self::default()
        }
    }
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFunctionCall {
    pub name: String,
    #[serde(default)]
    pub args: serde_json::Value,
}

/// A tool result sent back to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireFunctionResponse {
    pub name: String,
    pub response: serde_json::Value,
}

/// Tool declarations wrapper.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireTools {
    pub function_declarations: Vec<WireFunctionDeclaration>,
}

/// One declared function the model may call.
#[derive(Debug, Clone, Serialize)]
pub struct WireFunctionDeclaration {
    pub name: String,
    pub description: String,
    /// JSON Schema for the parameters.
    pub parameters: serde_json::Value,
}

/// Sampling configuration in wire form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireGenerationConfig {
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

/// One safety threshold entry.
#[derive(Debug, Clone, Serialize)]
pub struct WireSafetySetting {
    pub category: String,
    pub threshold: String,
}

/// The fixed safety thresholds applied to every request.
pub fn default_safety_settings() -> Vec<WireSafetySetting> {
    [
        "HARM_CATEGORY_HARASSMENT",
        "HARM_CATEGORY_HATE_SPEECH",
        "HARM_CATEGORY_SEXUALLY_EXPLICIT",
        "HARM_CATEGORY_DANGEROUS_CONTENT",
    ]
    .into_iter()
    .map(|category| WireSafetySetting {
        category: category.to_string(),
        threshold: "BLOCK_MEDIUM_AND_ABOVE".to_string(),
    })
    .collect()
}

// --- Response types ---

/// A full response from `generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<WireCandidate>,
}

/// One candidate in the response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireCandidate {
    #[serde(default)]
    pub content: Option<WireContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// API error response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(default)]
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub status: String,
}
