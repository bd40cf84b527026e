// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Firecrawl scraping client implementing [`ScrapeProvider`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use voxbridge_core::{ScrapeFormat, ScrapeProvider, ScrapedPage, VoxError};

use crate::retry::send_with_retry;

/// Maximum content length returned to callers. Scraped pages can be huge and
/// everything downstream ends up inside a model prompt.
const MAX_CONTENT_LEN: usize = 50 * 1024;

/// Client for the Firecrawl `/v1/scrape` endpoint.
#[derive(Debug, Clone)]
pub struct FirecrawlClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct ScrapeResponseBody {
    #[serde(default)]
    data: Option<ScrapeData>,
}

#[derive(Debug, Deserialize)]
struct ScrapeData {
    #[serde(default)]
    markdown: Option<String>,
    #[serde(default)]
    html: Option<String>,
    #[serde(default)]
    metadata: Option<ScrapeMetadata>,
}

#[derive(Debug, Deserialize)]
struct ScrapeMetadata {
    #[serde(default)]
    title: Option<String>,
}

impl FirecrawlClient {
    /// Creates a new Firecrawl client.
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> Result<Self, VoxError> {
        if api_key.is_empty() {
            return Err(VoxError::Config("firecrawl api_key is not set".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VoxError::ExternalService {
                service: "firecrawl",
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
impl ScrapeProvider for FirecrawlClient {
    async fn scrape(&self, url: &str, format: ScrapeFormat) -> Result<ScrapedPage, VoxError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| VoxError::Validation(format!("invalid URL '{url}': {e}")))?;
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(VoxError::Validation(format!(
                "URL scheme '{scheme}' not allowed; only http and https are supported"
            )));
        }

        let wire_format = match format {
            ScrapeFormat::Html => "html",
            // Plain text is served from the markdown rendering.
            ScrapeFormat::Text | ScrapeFormat::Markdown => "markdown",
        };

        let endpoint = format!("{}/v1/scrape", self.base_url);
        let body = serde_json::json!({
            "url": url,
            "formats": [wire_format],
        });

        let response = send_with_retry("firecrawl", self.timeout, || {
            self.client
                .post(&endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
        })
        .await?;

        let parsed: ScrapeResponseBody =
            response.json().await.map_err(|e| VoxError::ExternalService {
                service: "firecrawl",
                message: format!("failed to parse scrape response: {e}"),
                source: Some(Box::new(e)),
            })?;

        let data = parsed.data.ok_or(VoxError::ExternalService {
            service: "firecrawl",
            message: "scrape response carried no data".into(),
            source: None,
        })?;

        let mut content = match format {
            ScrapeFormat::Html => data.html.unwrap_or_default(),
            ScrapeFormat::Text | ScrapeFormat::Markdown => data.markdown.unwrap_or_default(),
        };
        if content.len() > MAX_CONTENT_LEN {
            content.truncate(MAX_CONTENT_LEN);
            content.push_str("\n\n[content truncated]");
        }

        debug!(url, bytes = content.len(), "scrape completed");

        Ok(ScrapedPage {
            title: data
                .metadata
                .and_then(|m| m.title)
                .unwrap_or_default(),
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> FirecrawlClient {
        FirecrawlClient::new(
            "fc-test".into(),
            base_url.to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn scrape_success_returns_title_and_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/scrape"))
            .and(header("authorization", "Bearer fc-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "data": {
                    "markdown": "# Example\nBody text.",
                    "metadata": {"title": "Example Domain"}
                }
            })))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let page = client
            .scrape("https://example.com", ScrapeFormat::Markdown)
            .await
            .unwrap();

        assert_eq!(page.title, "Example Domain");
        assert!(page.content.starts_with("# Example"));
    }

    #[tokio::test]
    async fn scrape_rejects_non_http_scheme() {
        let server = MockServer::start().await;
        let client = test_client(&server.uri());
        let err = client
            .scrape("ftp://example.com/file", ScrapeFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::Validation(_)));
    }

    #[tokio::test]
    async fn scrape_fails_on_missing_data() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": false})),
            )
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client
            .scrape("https://example.com", ScrapeFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            VoxError::ExternalService { service: "firecrawl", .. }
        ));
    }
}
