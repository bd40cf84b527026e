// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Function-calling tools for Voxbridge voice sessions.
//!
//! [`Tool`] is the unified interface every capability implements, and
//! [`ToolRegistry`] builds the per-session declaration set from the subject
//! profile's enabled integrations.

pub mod builtin;
pub mod tool;

pub use builtin::{
    ApiRequestTool, DomainCheckTool, GenerateDocumentTool, GoogleSheetsTool, NotionTool,
    ScrapeWebsiteTool, SearchWebTool, TriggerWebhookTool,
};
pub use tool::{Tool, ToolContext, ToolRegistry};

use std::sync::Arc;

use voxbridge_core::{ScrapeProvider, SearchProvider, VoxError};
use voxbridge_integrations::{DomainChecker, WebhookSender};

/// Assembles the standard registry: the three always-on tools plus every
/// gated tool, wired to the given collaborators.
pub fn standard_registry(
    search: Arc<dyn SearchProvider>,
    scrape: Arc<dyn ScrapeProvider>,
    domain_checker: DomainChecker,
    webhook: Option<WebhookSender>,
) -> Result<ToolRegistry, VoxError> {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GenerateDocumentTool));
    registry.register(Arc::new(SearchWebTool::new(search)));
    registry.register(Arc::new(ScrapeWebsiteTool::new(scrape)));
    registry.register(Arc::new(ApiRequestTool::new()?));
    registry.register(Arc::new(DomainCheckTool::new(domain_checker)));
    registry.register(Arc::new(TriggerWebhookTool::new(webhook)));
    registry.register(Arc::new(GoogleSheetsTool));
    registry.register(Arc::new(NotionTool));
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::time::Duration;
    use voxbridge_core::{
        IntegrationSetting, ScrapeFormat, ScrapedPage, SearchDepth, SearchResponse,
        SubjectProfile,
    };

    struct NullSearch;

    #[async_trait]
    impl SearchProvider for NullSearch {
        async fn search(
            &self,
            _query: &str,
            _depth: SearchDepth,
            _max_results: u32,
        ) -> Result<SearchResponse, VoxError> {
            Ok(SearchResponse {
                answer: None,
                results: vec![],
            })
        }
    }

    struct NullScrape;

    #[async_trait]
    impl ScrapeProvider for NullScrape {
        async fn scrape(
            &self,
            _url: &str,
            _format: ScrapeFormat,
        ) -> Result<ScrapedPage, VoxError> {
            Ok(ScrapedPage {
                title: String::new(),
                content: String::new(),
            })
        }
    }

    fn registry() -> ToolRegistry {
        standard_registry(
            Arc::new(NullSearch),
            Arc::new(NullScrape),
            DomainChecker::new(Duration::from_secs(5)).unwrap(),
            None,
        )
        .unwrap()
    }

    #[test]
    fn standard_registry_holds_all_eight_tools() {
        assert_eq!(registry().len(), 8);
    }

    #[test]
    fn bare_profile_gets_only_always_on_tools() {
        let decls = registry().declarations_for(&SubjectProfile::default());
        let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["generate_document", "scrape_website", "search_web"]
        );
    }

    #[test]
    fn integrations_unlock_gated_tools() {
        let profile = SubjectProfile {
            name: "Bot".into(),
            integrations: vec![
                IntegrationSetting::enabled("api-request-tool"),
                IntegrationSetting::enabled("webhook-trigger"),
            ],
            ..SubjectProfile::default()
        };
        let decls = registry().declarations_for(&profile);
        let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "generate_document",
                "make_api_request",
                "scrape_website",
                "search_web",
                "trigger_webhook"
            ]
        );
    }

    #[test]
    fn notion_declares_for_either_oauth_integration() {
        for id in ["notion-oauth-source", "notion-oauth-action"] {
            let profile = SubjectProfile {
                name: "Bot".into(),
                integrations: vec![IntegrationSetting::enabled(id)],
                ..SubjectProfile::default()
            };
            let decls = registry().declarations_for(&profile);
            let names: Vec<&str> = decls.iter().map(|d| d.name.as_str()).collect();
            assert!(names.contains(&"manage_notion"), "missing for {id}");
        }
    }
}
