// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock collaborators for deterministic testing.
//!
//! `MockCompletionProvider` implements `CompletionProvider` with a FIFO queue
//! of pre-configured responses and records every request it receives,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use voxbridge_core::{
    Candidate, CompletionProvider, CompletionRequest, CompletionResponse, ScrapeFormat,
    ScrapeProvider, ScrapedPage, SearchDepth, SearchProvider, SearchResponse, TurnPart,
    VoxError,
};

/// A mock completion provider that returns pre-configured responses.
///
/// Responses are popped from a FIFO queue. When the queue is empty a
/// single-candidate "mock response" text is returned. Every request is
/// recorded for later inspection.
pub struct MockCompletionProvider {
    responses: Arc<Mutex<VecDeque<CompletionResponse>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockCompletionProvider {
    /// Create a new mock provider with an empty response queue.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock provider pre-loaded with the given responses.
    pub fn with_responses(responses: Vec<CompletionResponse>) -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::from(responses))),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response to the end of the queue.
    pub async fn push_response(&self, response: CompletionResponse) {
        self.responses.lock().await.push_back(response);
    }

    /// Every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().await.clone()
    }

    /// Convenience: a single-candidate response containing one text part.
    pub fn text_response(text: impl Into<String>) -> CompletionResponse {
        CompletionResponse {
            candidates: vec![Candidate {
                parts: vec![TurnPart::Text { text: text.into() }],
            }],
        }
    }

    /// Convenience: a single-candidate response requesting one tool call.
    pub fn tool_call_response(name: impl Into<String>, args: serde_json::Value) -> CompletionResponse {
        CompletionResponse {
            candidates: vec![Candidate {
                parts: vec![TurnPart::FunctionCall {
                    name: name.into(),
                    args,
                }],
            }],
        }
    }

    /// Convenience: a response with candidates but no parts at all.
    pub fn empty_response() -> CompletionResponse {
        CompletionResponse {
            candidates: vec![Candidate { parts: vec![] }],
        }
    }
}

impl Default for MockCompletionProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockCompletionProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, VoxError> {
        self.requests.lock().await.push(request);
        Ok(self
            .responses
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| Self::text_response("mock response")))
    }
}

/// A search provider that returns a fixed response.
pub struct StubSearchProvider {
    pub answer: Option<String>,
}

impl StubSearchProvider {
    pub fn with_answer(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }
}

#[async_trait]
impl SearchProvider for StubSearchProvider {
    async fn search(
        &self,
        _query: &str,
        _depth: SearchDepth,
        _max_results: u32,
    ) -> Result<SearchResponse, VoxError> {
        Ok(SearchResponse {
            answer: self.answer.clone(),
            results: vec![],
        })
    }
}

/// A scrape provider that returns a fixed page.
pub struct StubScrapeProvider {
    pub title: String,
    pub content: String,
}

#[async_trait]
impl ScrapeProvider for StubScrapeProvider {
    async fn scrape(&self, _url: &str, _format: ScrapeFormat) -> Result<ScrapedPage, VoxError> {
        Ok(ScrapedPage {
            title: self.title.clone(),
            content: self.content.clone(),
        })
    }
}
