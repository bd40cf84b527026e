// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! External integration clients for Voxbridge.
//!
//! Covers web search (Tavily), page scraping (Firecrawl), domain
//! availability (RDAP), and outbound webhooks. The search and scrape
//! clients implement the provider traits from `voxbridge-core`.

pub mod domain;
pub mod firecrawl;
mod retry;
pub mod tavily;
pub mod webhook;

pub use domain::{DomainCheck, DomainChecker, DomainStatus};
pub use firecrawl::FirecrawlClient;
pub use tavily::TavilyClient;
pub use webhook::WebhookSender;

use std::time::Duration;

use voxbridge_config::model::{FirecrawlConfig, TavilyConfig};
use voxbridge_core::VoxError;

/// Builds a [`TavilyClient`] from the `[tavily]` config section.
pub fn tavily_from_config(config: &TavilyConfig) -> Result<TavilyClient, VoxError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| VoxError::Config("tavily.api_key is not set".into()))?;
    TavilyClient::new(
        api_key,
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )
}

/// Builds a [`FirecrawlClient`] from the `[firecrawl]` config section.
pub fn firecrawl_from_config(config: &FirecrawlConfig) -> Result<FirecrawlClient, VoxError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| VoxError::Config("firecrawl.api_key is not set".into()))?;
    FirecrawlClient::new(
        api_key,
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_requires_api_keys() {
        assert!(matches!(
            tavily_from_config(&TavilyConfig::default()),
            Err(VoxError::Config(_))
        ));
        assert!(matches!(
            firecrawl_from_config(&FirecrawlConfig::default()),
            Err(VoxError::Config(_))
        ));
    }
}
