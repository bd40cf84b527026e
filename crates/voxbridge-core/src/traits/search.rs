// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search collaborator trait.

use async_trait::async_trait;

use crate::error::VoxError;
use crate::types::{SearchDepth, SearchResponse};

/// Adapter for the web-search API.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Runs a web search and returns a synthesized answer plus scored results.
    async fn search(
        &self,
        query: &str,
        depth: SearchDepth,
        max_results: u32,
    ) -> Result<SearchResponse, VoxError>;
}
