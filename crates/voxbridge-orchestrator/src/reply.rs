// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Phase-1-only completions: plain replies and document summaries.
//!
//! No tool schemas are attached; the persona context and any knowledge-base
//! excerpts are assembled into a single prompt.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{info, warn};
use voxbridge_core::{
    ChatTurn, CompletionProvider, CompletionRequest, SamplingConfig, SubjectProfile, VoxError,
};

/// Per-document excerpt budget inside the knowledge-base context.
const KNOWLEDGE_EXCERPT_CHARS: usize = 2000;

/// Document content budget for summarization prompts.
const SUMMARY_CONTENT_CHARS: usize = 4000;

/// One prior chat message as supplied by the frontend.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessage {
    pub sender: String,
    pub content: String,
}

/// One knowledge-base document with already-extracted text.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentInfo {
    pub name: String,
    #[serde(rename = "type", default)]
    pub doc_type: String,
    pub content: String,
}

/// Generates plain replies and document summaries through the completion
/// provider.
pub struct ResponseGenerator {
    provider: Arc<dyn CompletionProvider>,
}

fn truncate_chars(s: &str, limit: usize) -> &str {
    match s.char_indices().nth(limit) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

impl ResponseGenerator {
    pub fn new(provider: Arc<dyn CompletionProvider>) -> Self {
        Self { provider }
    }

    /// Builds the persona context block, with a knowledge-base section when
    /// documents are supplied.
    fn build_context(profile: &SubjectProfile, documents: &[DocumentInfo]) -> String {
        let name = if profile.name.is_empty() {
            "AI Assistant"
        } else {
            &profile.name
        };
        let description = if profile.description.is_empty() {
            "You are a helpful AI assistant."
        } else {
            &profile.description
        };
        let mut context = format!("You are {name}. {description}");

        if !documents.is_empty() {
            context.push_str("\n\n=== YOUR KNOWLEDGE BASE ===\n");
            context.push_str(
                "You have access to the following documents. Use this information to provide \
                 accurate and detailed responses:\n\n",
            );
            for doc in documents {
                if doc.content.is_empty() {
                    continue;
                }
                context.push_str(&format!("DOCUMENT: {}\n", doc.name));
                context.push_str(&format!("Type: {}\n", doc.doc_type));
                context.push_str(&format!(
                    "CONTENT:\n{}...\n\n",
                    truncate_chars(&doc.content, KNOWLEDGE_EXCERPT_CHARS)
                ));
            }
            context.push_str(
                "This is your knowledge base. Reference this information throughout \
                 conversations to provide accurate responses.",
            );
        }
        context
    }

    /// Formats the trailing ten history messages as dialogue lines.
    fn build_history(history: &[ChatMessage], contact_name: &str) -> String {
        let start = history.len().saturating_sub(10);
        history[start..]
            .iter()
            .map(|m| {
                if m.sender == "user" {
                    format!("User: {}", m.content)
                } else {
                    format!("{contact_name}: {}", m.content)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Generates a single-turn reply in the persona's voice.
    pub async fn generate_reply(
        &self,
        profile: &SubjectProfile,
        user_message: &str,
        history: &[ChatMessage],
        documents: &[DocumentInfo],
    ) -> Result<String, VoxError> {
        if user_message.trim().is_empty() {
            return Err(VoxError::Validation("message must not be empty".into()));
        }

        let contact_name = if profile.name.is_empty() {
            "AI"
        } else {
            &profile.name
        };
        let context = Self::build_context(profile, documents);
        let conversation = Self::build_history(history, contact_name);
        let prompt = format!(
            "{context}\n\nPrevious conversation:\n{conversation}\n\nUser: \
             {user_message}\n{contact_name}:"
        );

        let response = self
            .provider
            .complete(CompletionRequest {
                system: None,
                turns: vec![ChatTurn::user(prompt)],
                tools: vec![],
                sampling: SamplingConfig::conversational(),
            })
            .await?;

        let text = response
            .primary()
            .map(|c| c.text())
            .unwrap_or_default();
        if text.is_empty() {
            return Err(VoxError::EmptyResponse);
        }

        info!(contact = contact_name, chars = text.len(), "generated reply");
        Ok(text)
    }

    /// Summarizes a document's extracted text.
    ///
    /// Never fails the caller: any provider error degrades to a placeholder
    /// summary so the surrounding upload stays successful.
    pub async fn summarize_document(&self, content: &str, filename: &str) -> String {
        let prompt = format!(
            "Please provide a comprehensive summary of this document:\n\n\
             **Document:** {filename}\n\n\
             **Content:**\n{}\n\n\
             Please summarize:\n\
             1. Main topics and themes\n\
             2. Key points and findings\n\
             3. Important details\n\
             4. Overall purpose/conclusion\n\n\
             Keep the summary detailed but concise.",
            truncate_chars(content, SUMMARY_CONTENT_CHARS)
        );

        let result = self
            .provider
            .complete(CompletionRequest {
                system: None,
                turns: vec![ChatTurn::user(prompt)],
                tools: vec![],
                sampling: SamplingConfig::factual(),
            })
            .await;

        match result {
            Ok(response) => {
                let text = response.primary().map(|c| c.text()).unwrap_or_default();
                if text.is_empty() {
                    format!("Summary: {filename} - Content analysis not available")
                } else {
                    text
                }
            }
            Err(e) => {
                warn!(filename, error = %e, "summary generation failed, degrading");
                format!("Summary: {filename} - Error generating summary: {e}")
            }
        }
    }
}
