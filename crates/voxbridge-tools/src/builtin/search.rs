// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Web search tool (always-on).

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use voxbridge_core::{SearchDepth, SearchProvider, VoxError};

use crate::tool::{Tool, ToolContext};

/// Runs a web search through the configured [`SearchProvider`].
pub struct SearchWebTool {
    provider: Arc<dyn SearchProvider>,
}

impl SearchWebTool {
    pub fn new(provider: Arc<dyn SearchProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for SearchWebTool {
    fn name(&self) -> &str {
        "search_web"
    }

    fn description(&self) -> &str {
        "Search the web for current information, news, facts, or real-time data. Use when users \
         ask to search, look up, google, find information, or get current/recent data about \
         anything."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query - what to search for on the web"
                },
                "searchDepth": {
                    "type": "string",
                    "description": "Search depth for better results",
                    "enum": ["basic", "advanced"],
                    "default": "basic"
                },
                "maxResults": {
                    "type": "number",
                    "description": "Maximum number of search results to return (1-20)",
                    "default": 5
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(
        &self,
        _ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let query = args["query"].as_str().unwrap_or_default();
        if query.is_empty() {
            return Err(VoxError::Validation("query is required for web search".into()));
        }
        let depth = args["searchDepth"]
            .as_str()
            .map(SearchDepth::from_str)
            .transpose()
            .map_err(|_| {
                VoxError::Validation("searchDepth must be 'basic' or 'advanced'".into())
            })?
            .unwrap_or(SearchDepth::Basic);
        let max_results = args["maxResults"].as_u64().unwrap_or(5) as u32;

        let response = self.provider.search(query, depth, max_results).await?;

        Ok(json!({
            "success": true,
            "query": query,
            "answer": response.answer,
            "results": response.results,
        }))
    }
}
