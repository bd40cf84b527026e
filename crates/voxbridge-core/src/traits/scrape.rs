// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scrape collaborator trait.

use async_trait::async_trait;

use crate::error::VoxError;
use crate::types::{ScrapeFormat, ScrapedPage};

/// Adapter for the web-scraping API.
#[async_trait]
pub trait ScrapeProvider: Send + Sync {
    /// Extracts content from a single URL in the requested format.
    async fn scrape(&self, url: &str, format: ScrapeFormat) -> Result<ScrapedPage, VoxError>;
}
