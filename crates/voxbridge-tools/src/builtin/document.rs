// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Document generation tool (always-on).

use async_trait::async_trait;
use chrono::{Local, Utc};
use rand::Rng;
use serde_json::json;
use tracing::info;
use voxbridge_core::VoxError;

use crate::tool::{Tool, ToolContext};

/// Produces a displayable markdown document from model-written content.
///
/// The model writes the full document body itself and passes it here; the
/// tool wraps it in document metadata the frontend can render.
pub struct GenerateDocumentTool;

fn new_document_id() -> String {
    let suffix: String = {
        let mut rng = rand::thread_rng();
        (0..8)
            .map(|_| char::from_digit(rng.gen_range(0..16), 16).unwrap_or('0'))
            .collect()
    };
    format!("voice_doc_{}_{suffix}", Utc::now().timestamp())
}

#[async_trait]
impl Tool for GenerateDocumentTool {
    fn name(&self) -> &str {
        "generate_document"
    }

    fn description(&self) -> &str {
        "Generate a written document, essay, report, or any written content when the user asks \
         for it. Use this function when user asks to: write something down, put something on \
         paper, write an essay, create a document, make a report, draft something, write X words \
         about, give me X words on, create written content, or produce any type of written \
         material."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "content": {
                    "type": "string",
                    "description": "The complete content to write in the document, formatted in markdown with proper headings, paragraphs, and structure"
                },
                "wordCount": {
                    "type": "number",
                    "description": "Target word count if specified by the user (optional)"
                }
            },
            "required": ["content"]
        })
    }

    async fn execute(
        &self,
        ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let content = args["content"].as_str().unwrap_or_default();
        if content.is_empty() {
            return Err(VoxError::Validation("document content is required".into()));
        }
        let word_count = args["wordCount"].as_u64();

        let document_id = new_document_id();
        let summary = match word_count {
            Some(n) => format!("Voice-generated document ({n} words)"),
            None => "Voice-generated document".to_string(),
        };

        info!(
            document_id,
            chars = content.len(),
            session = %ctx.session_id,
            "generated document"
        );

        Ok(json!({
            "document": {
                "id": document_id,
                "name": format!(
                    "Voice Generated Document {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S")
                ),
                "type": "text/markdown",
                "content": content,
                "extracted_text": content,
                "size": content.len(),
                "uploaded_at": Utc::now().to_rfc3339(),
                "summary": summary,
                "metadata": {
                    "source": "voice_call",
                    "session_id": ctx.session_id.to_string(),
                    "contact_name": ctx.profile.name,
                    "word_count": word_count,
                    "generated_at": Utc::now().to_rfc3339(),
                }
            },
            "message": "Document generated successfully"
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
            profile: SubjectProfile {
                name: "Ava".into(),
                ..SubjectProfile::default()
            },
        }
    }

    #[tokio::test]
    async fn generates_document_with_metadata() {
        let result = GenerateDocumentTool
            .execute(&ctx(), json!({"content": "# Title\nBody", "wordCount": 100}))
            .await
            .unwrap();

        let doc = &result["document"];
        assert!(doc["id"].as_str().unwrap().starts_with("voice_doc_"));
        assert_eq!(doc["content"], "# Title\nBody");
        assert_eq!(doc["type"], "text/markdown");
        assert_eq!(doc["metadata"]["contact_name"], "Ava");
        assert_eq!(doc["metadata"]["word_count"], 100);
        assert_eq!(result["message"], "Document generated successfully");
    }

    #[tokio::test]
    async fn empty_content_is_rejected() {
        let err = GenerateDocumentTool
            .execute(&ctx(), json!({"content": ""}))
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::Validation(_)));
    }

    #[test]
    fn document_ids_have_expected_shape() {
        let id = new_document_id();
        let rest = id.strip_prefix("voice_doc_").unwrap();
        let (secs, suffix) = rest.rsplit_once('_').unwrap();
        assert!(secs.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 8);
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
