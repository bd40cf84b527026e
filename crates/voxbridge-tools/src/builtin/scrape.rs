// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Website scraping tool (always-on).

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use voxbridge_core::{ScrapeFormat, ScrapeProvider, VoxError};

use crate::tool::{Tool, ToolContext};

/// Extracts page content through the configured [`ScrapeProvider`].
pub struct ScrapeWebsiteTool {
    provider: Arc<dyn ScrapeProvider>,
}

impl ScrapeWebsiteTool {
    pub fn new(provider: Arc<dyn ScrapeProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for ScrapeWebsiteTool {
    fn name(&self) -> &str {
        "scrape_website"
    }

    fn description(&self) -> &str {
        "Extract content from websites when users ask to scrape, crawl, or get content from \
         specific URLs. Use when user asks to go to a website and get its content."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The URL to scrape content from"
                },
                "extractType": {
                    "type": "string",
                    "description": "Type of content to extract",
                    "enum": ["text", "markdown", "html"]
                }
            },
            "required": ["url"]
        })
    }

    async fn execute(
        &self,
        _ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let url = args["url"].as_str().unwrap_or_default();
        if url.is_empty() {
            return Err(VoxError::Validation(
                "url is required for website scraping".into(),
            ));
        }
        let format = args["extractType"]
            .as_str()
            .map(ScrapeFormat::from_str)
            .transpose()
            .map_err(|_| {
                VoxError::Validation("extractType must be 'text', 'markdown', or 'html'".into())
            })?
            .unwrap_or(ScrapeFormat::Text);

        let page = self.provider.scrape(url, format).await?;

        Ok(json!({
            "success": true,
            "url": url,
            "title": page.title,
            "content": page.content,
        }))
    }
}
