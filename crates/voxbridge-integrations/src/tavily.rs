// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tavily web-search client implementing [`SearchProvider`].

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;
use voxbridge_core::{SearchDepth, SearchProvider, SearchResponse, SearchResult, VoxError};

use crate::retry::send_with_retry;

/// Client for the Tavily `/search` endpoint.
#[derive(Debug, Clone)]
pub struct TavilyClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

/// Request body for `/search`. The API key travels in the body.
#[derive(Debug, Serialize)]
struct SearchRequestBody<'a> {
    api_key: &'a str,
    query: &'a str,
    search_depth: String,
    max_results: u32,
    include_answer: bool,
}

#[derive(Debug, Deserialize)]
struct SearchResponseBody {
    #[serde(default)]
    answer: Option<String>,
    #[serde(default)]
    results: Vec<SearchResultBody>,
}

#[derive(Debug, Deserialize)]
struct SearchResultBody {
    #[serde(default)]
    title: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    content: String,
    #[serde(default)]
    score: f64,
}

impl TavilyClient {
    /// Creates a new Tavily client.
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, VoxError> {
        if api_key.is_empty() {
            return Err(VoxError::Config("tavily api_key is not set".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VoxError::ExternalService {
                service: "tavily",
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self {
            client,
            api_key,
            base_url,
            timeout,
        })
    }
}

#[async_trait]
impl SearchProvider for TavilyClient {
    async fn search(
        &self,
        query: &str,
        depth: SearchDepth,
        max_results: u32,
    ) -> Result<SearchResponse, VoxError> {
        let url = format!("{}/search", self.base_url);
        let body = SearchRequestBody {
            api_key: &self.api_key,
            query,
            search_depth: depth.to_string(),
            max_results: max_results.clamp(1, 20),
            include_answer: true,
        };

        let response = send_with_retry("tavily", self.timeout, || {
            self.client.post(&url).json(&body)
        })
        .await?;

        let parsed: SearchResponseBody =
            response.json().await.map_err(|e| VoxError::ExternalService {
                service: "tavily",
                message: format!("failed to parse search response: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(query, results = parsed.results.len(), "search completed");

        Ok(SearchResponse {
            answer: parsed.answer,
            results: parsed
                .results
                .into_iter()
                .map(|r| SearchResult {
                    title: r.title,
                    url: r.url,
                    content: r.content,
                    score: r.score,
                })
                .collect(),
        })
    }
}
