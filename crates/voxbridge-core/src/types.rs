// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared across the Voxbridge workspace.
//!
//! The completion model here is provider-neutral: the gateway, session, and
//! orchestrator crates speak these types, and the Gemini crate maps them onto
//! the generativelanguage wire format.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Unique identifier for a voice session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Lifecycle status of a voice session.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Initialized,
    Active,
    Ended,
}

/// Per-integration configuration payload. The frontend nests the enablement
/// flag under `config`, not at the top level of the entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Whether the integration is switched on for this profile.
    #[serde(default)]
    pub enabled: bool,
}

/// One integration entry on a subject profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrationSetting {
    /// Integration identifier (e.g. "api-request-tool", "webhook-trigger").
    #[serde(rename = "integrationId")]
    pub integration_id: String,
    /// Configuration for this integration. Absent means disabled.
    #[serde(default)]
    pub config: IntegrationConfig,
}

impl IntegrationSetting {
    /// An entry with the integration switched on.
    pub fn enabled(id: impl Into<String>) -> Self {
        Self {
            integration_id: id.into(),
            config: IntegrationConfig { enabled: true },
        }
    }

    /// An entry with the integration switched off.
    pub fn disabled(id: impl Into<String>) -> Self {
        Self {
            integration_id: id.into(),
            config: IntegrationConfig { enabled: false },
        }
    }
}

/// The persona a session speaks as, supplied by the caller at creation and
/// immutable thereafter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectProfile {
    /// Display name of the persona.
    pub name: String,
    /// Natural-language description of the persona.
    #[serde(default)]
    pub description: String,
    /// Optional voice identifier for the downstream audio connection.
    #[serde(default)]
    pub voice: Option<String>,
    /// Integrations declared on the profile.
    #[serde(default)]
    pub integrations: Vec<IntegrationSetting>,
}

impl SubjectProfile {
    /// Returns the set of integration ids that are enabled on this profile.
    pub fn enabled_integrations(&self) -> HashSet<&str> {
        self.integrations
            .iter()
            .filter(|i| i.config.enabled)
            .map(|i| i.integration_id.as_str())
            .collect()
    }
}

/// A named capability offered to the language model: description plus a JSON
/// Schema for its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDeclaration {
    pub name: String,
    pub description: String,
    /// JSON Schema object (required/optional fields, enums, defaults).
    pub parameters: serde_json::Value,
}

// --- Completion model ---

/// Role of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
    Tool,
}

/// One part of a conversation turn or model candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TurnPart {
    /// Plain text.
    Text { text: String },
    /// The model requests a tool invocation.
    FunctionCall {
        name: String,
        args: serde_json::Value,
    },
    /// A tool result carried back to the model.
    FunctionResult {
        name: String,
        result: serde_json::Value,
    },
}

/// One turn of conversation: a role and an ordered list of parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub parts: Vec<TurnPart>,
}

impl ChatTurn {
    /// A user turn containing a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            parts: vec![TurnPart::Text { text: text.into() }],
        }
    }

    /// A model turn containing a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            parts: vec![TurnPart::Text { text: text.into() }],
        }
    }
}

/// Sampling parameters for a completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SamplingConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
}

impl SamplingConfig {
    /// Conversational defaults used for chat and voice responses.
    pub fn conversational() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 2048,
        }
    }

    /// Lower-temperature settings for factual document summaries.
    pub fn factual() -> Self {
        Self {
            temperature: 0.3,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 1024,
        }
    }
}

/// A full completion request for a [`CompletionProvider`](crate::CompletionProvider).
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// System instruction text, if any.
    pub system: Option<String>,
    /// Ordered conversation turns.
    pub turns: Vec<ChatTurn>,
    /// Tool declarations the model may invoke. Empty disables tool use.
    pub tools: Vec<ToolDeclaration>,
    /// Sampling parameters.
    pub sampling: SamplingConfig,
}

/// One candidate answer from the model.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// Ordered parts: text and/or function-call requests.
    pub parts: Vec<TurnPart>,
}

impl Candidate {
    /// Concatenates all text parts in order.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|p| match p {
                TurnPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }

    /// Returns the function-call requests in this candidate, in order.
    pub fn function_calls(&self) -> Vec<(&str, &serde_json::Value)> {
        self.parts
            .iter()
            .filter_map(|p| match p {
                TurnPart::FunctionCall { name, args } => Some((name.as_str(), args)),
                _ => None,
            })
            .collect()
    }
}

/// A response from a completion provider.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    pub candidates: Vec<Candidate>,
}

impl CompletionResponse {
    /// The first candidate, if the model returned any.
    pub fn primary(&self) -> Option<&Candidate> {
        self.candidates.first()
    }
}

// --- Search / scrape collaborator types ---

/// Search depth requested from the search collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    Basic,
    Advanced,
}

/// A single scored result from the search collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub content: String,
    #[serde(default)]
    pub score: f64,
}

/// The full answer from the search collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Synthesized direct answer, when the collaborator produced one.
    #[serde(default)]
    pub answer: Option<String>,
    pub results: Vec<SearchResult>,
}

/// Output format requested from the scrape collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ScrapeFormat {
    Text,
    Markdown,
    Html,
}

/// Extracted content for one scraped page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPage {
    #[serde(default)]
    pub title: String,
    pub content: String,
}
