// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic HTTP request tool, gated behind the `api-request-tool` integration.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Method;
use serde_json::json;
use tracing::info;
use voxbridge_core::VoxError;

use crate::tool::{Tool, ToolContext};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum response body size returned to the model.
const MAX_BODY_LEN: usize = 100 * 1024;

/// Lets the model call arbitrary HTTP endpoints on the user's behalf.
pub struct ApiRequestTool {
    client: reqwest::Client,
}

impl ApiRequestTool {
    pub fn new() -> Result<Self, VoxError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| VoxError::ExternalService {
                service: "api-request",
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Tool for ApiRequestTool {
    fn name(&self) -> &str {
        "make_api_request"
    }

    fn description(&self) -> &str {
        "Make an HTTP API request to fetch data from external services"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "The URL to make the request to"
                },
                "method": {
                    "type": "string",
                    "description": "HTTP method (GET, POST, PUT, DELETE)",
                    "enum": ["GET", "POST", "PUT", "DELETE"]
                },
                "headers": {
                    "type": "object",
                    "description": "HTTP headers as key-value pairs"
                },
                "body": {
                    "type": "string",
                    "description": "Request body for POST/PUT requests"
                }
            },
            "required": ["url"]
        })
    }

    fn required_integrations(&self) -> &[&str] {
        &["api-request-tool"]
    }

    async fn execute(
        &self,
        _ctx: &ToolContext,
        args: serde_json::Value,
    ) -> Result<serde_json::Value, VoxError> {
        let url = args["url"].as_str().unwrap_or_default();
        if url.is_empty() {
            return Err(VoxError::Validation("url is required for API request".into()));
        }
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| VoxError::Validation(format!("invalid URL '{url}': {e}")))?;
        let scheme = parsed.scheme();
        if scheme != "http" && scheme != "https" {
            return Err(VoxError::Validation(format!(
                "URL scheme '{scheme}' not allowed; only http and https are supported"
            )));
        }

        let method = match args["method"].as_str().unwrap_or("GET") {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            other => {
                return Err(VoxError::Validation(format!(
                    "method '{other}' not allowed; use GET, POST, PUT, or DELETE"
                )));
            }
        };

        info!(%method, url, "making API request");

        let mut request = self.client.request(method.clone(), parsed);
        if let Some(headers) = args["headers"].as_object() {
            for (name, value) in headers {
                if let Some(value) = value.as_str() {
                    request = request.header(name, value);
                }
            }
        }
        if let Some(body) = args["body"].as_str() {
            if matches!(method, Method::POST | Method::PUT) {
                request = request.body(body.to_string());
            }
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                VoxError::Timeout {
                    duration: REQUEST_TIMEOUT,
                }
            } else {
                VoxError::ExternalService {
                    service: "api-request",
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                }
            }
        })?;

        let status = response.status();
        let mut text = response.text().await.unwrap_or_default();
        if text.len() > MAX_BODY_LEN {
            text.truncate(MAX_BODY_LEN);
        }

        if !status.is_success() {
            return Err(VoxError::ExternalService {
                service: "api-request",
                message: format!("HTTP request failed: {status}"),
                source: None,
            });
        }

        // JSON bodies are handed back structured, anything else as text.
        let data = serde_json::from_str::<serde_json::Value>(&text)
            .unwrap_or(serde_json::Value::String(text));

        Ok(json!({
            "success": true,
            "status": status.as_u16(),
            "data": data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxbridge_core::{SessionId, SubjectProfile};
    use wiremock::matchers::{body_string, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn ctx() -> ToolContext {
        ToolContext {
            session_id: SessionId("voice_session_1_cafebabe".into()),
            profile: SubjectProfile::default(),
        }
    }

    #[tokio::test]
    async fn get_request_returns_parsed_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"value": 42})),
            )
            .mount(&server)
            .await;

        let tool = ApiRequestTool::new().unwrap();
        let result = tool
            .execute(&ctx(), json!({"url": format!("{}/data", server.uri())}))
            .await
            .unwrap();
        assert_eq!(result["success"], true);
        assert_eq!(result["status"], 200);
        assert_eq!(result["data"]["value"], 42);
    }

    #[tokio::test]
    async fn post_request_forwards_headers_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("x-api-key", "secret"))
            .and(body_string("payload"))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .expect(1)
            .mount(&server)
            .await;

        let tool = ApiRequestTool::new().unwrap();
        let result = tool
            .execute(
                &ctx(),
                json!({
                    "url": server.uri(),
                    "method": "POST",
                    "headers": {"x-api-key": "secret"},
                    "body": "payload"
                }),
            )
            .await
            .unwrap();
        assert_eq!(result["status"], 201);
        assert_eq!(result["data"], "created");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let tool = ApiRequestTool::new().unwrap();
        let err = tool
            .execute(&ctx(), json!({"url": server.uri()}))
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::ExternalService { .. }));
    }

    #[tokio::test]
    async fn disallowed_method_is_rejected() {
        let tool = ApiRequestTool::new().unwrap();
        let err = tool
            .execute(
                &ctx(),
                json!({"url": "https://example.com", "method": "PATCH"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::Validation(_)));
    }

    #[tokio::test]
    async fn non_http_scheme_is_rejected() {
        let tool = ApiRequestTool::new().unwrap();
        let err = tool
            .execute(&ctx(), json!({"url": "file:///etc/passwd"}))
            .await
            .unwrap_err();
        assert!(matches!(err, VoxError::Validation(_)));
    }
}
