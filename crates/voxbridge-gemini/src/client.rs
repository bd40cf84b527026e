// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini `generateContent` API.
//!
//! Provides [`GeminiClient`] which handles request construction, API-key
//! authentication, request timeouts, and transient error retry.

use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};
use voxbridge_core::VoxError;

use crate::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// HTTP client for Gemini API communication.
///
/// Manages connection pooling and retry logic for transient errors
/// (429, 500, 503). The API key travels as a query parameter, matching the
/// generativelanguage REST convention.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
}

impl GeminiClient {
    /// Creates a new Gemini API client.
    ///
    /// # Arguments
    /// * `api_key` - API key for authentication
    /// * `model` - Model identifier (e.g. "gemini-1.5-flash")
    /// * `base_url` - API base URL (overridable for testing)
    /// * `timeout` - Request-level deadline for each attempt
    pub fn new(
        api_key: String,
        model: String,
        base_url: String,
        timeout: Duration,
    ) -> Result<Self, VoxError> {
        if api_key.is_empty() {
            return Err(VoxError::Config("gemini api_key is not set".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VoxError::ExternalService {
                service: "gemini",
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url,
            timeout,
            max_retries: 1,
        })
    }

    /// Returns the model identifier this client targets.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends a `generateContent` request and returns the parsed response.
    ///
    /// On transient errors (429, 500, 503), retries once after a one-second
    /// delay with jitter. A request-level timeout surfaces as
    /// [`VoxError::Timeout`], never as a hang.
    pub async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, VoxError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let jitter_ms = rand::thread_rng().gen_range(0..250);
                warn!(attempt, "retrying generateContent after transient error");
                tokio::time::sleep(Duration::from_millis(1000 + jitter_ms)).await;
            }

            let response = self
                .client
                .post(&url)
                .query(&[("key", self.api_key.as_str())])
                .json(request)
                .send()
                .await
                .map_err(|e| {
                    if e.is_timeout() {
                        VoxError::Timeout {
                            duration: self.timeout,
                        }
                    } else {
                        VoxError::ExternalService {
                            service: "gemini",
                            message: format!("HTTP request failed: {e}"),
                            source: Some(Box::new(e)),
                        }
                    }
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "generateContent response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| VoxError::ExternalService {
                    service: "gemini",
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                let parsed: GenerateContentResponse =
                    serde_json::from_str(&body).map_err(|e| VoxError::ExternalService {
                        service: "gemini",
                        message: format!("failed to parse API response: {e}"),
                        source: Some(Box::new(e)),
                    })?;
                return Ok(parsed);
            }

            if is_transient_error(status) && attempt < self.max_retries {
                let body = response.text().await.unwrap_or_default();
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(VoxError::ExternalService {
                    service: "gemini",
                    message: format!("API returned {status}: {body}"),
                    source: None,
                });
                continue;
            }

            // Non-transient error or exhausted retries.
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "Gemini API error ({}): {}",
                    api_err.error.status, api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(VoxError::ExternalService {
                service: "gemini",
                message,
                source: None,
            });
        }

        Err(last_error.unwrap_or_else(|| VoxError::ExternalService {
            service: "gemini",
            message: "generateContent failed after retries".into(),
            source: None,
        }))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        WireContent, WireGenerationConfig, WirePart, default_safety_settings,
    };
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(base_url: &str) -> GeminiClient {
        GeminiClient::new(
            "test-api-key".into(),
            "gemini-1.5-flash".into(),
            base_url.to_string(),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    fn test_request() -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![WireContent {
                role: "user".into(),
                parts: vec![WirePart::text("Hello")],
            }],
            system_instruction: None,
            tools: None,
            generation_config: WireGenerationConfig {
                temperature: 0.7,
                top_k: 40,
                top_p: 0.95,
                max_output_tokens: 2048,
            },
            safety_settings: default_safety_settings(),
        }
    }

    fn text_response(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": text}]},
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn generate_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/models/gemini-1.5-flash:generateContent"))
            .and(query_param("key", "test-api-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Hi there!")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.generate(&test_request()).await.unwrap();

        assert_eq!(result.candidates.len(), 1);
        let parts = &result.candidates[0].content.as_ref().unwrap().parts;
        assert_eq!(parts[0].text.as_deref(), Some("Hi there!"));
    }

    #[tokio::test]
    async fn generate_retries_on_429() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        });

        // First request returns 429, second returns 200.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429).set_body_json(&error_body))
            .up_to_n_times(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_response("After retry")))
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let result = client.generate(&test_request()).await.unwrap();
        assert_eq!(result.candidates.len(), 1);
    }

    #[tokio::test]
    async fn generate_fails_on_400_without_retry() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"code": 400, "message": "Invalid model", "status": "INVALID_ARGUMENT"}
        });

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(&error_body))
            .expect(1)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&test_request()).await.unwrap_err();
        assert!(err.to_string().contains("INVALID_ARGUMENT"), "got: {err}");
    }

    #[tokio::test]
    async fn generate_exhausts_retries_on_503() {
        let server = MockServer::start().await;

        let error_body = serde_json::json!({
            "error": {"code": 503, "message": "Overloaded", "status": "UNAVAILABLE"}
        });

        // Both attempts return 503.
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_json(&error_body))
            .expect(2)
            .mount(&server)
            .await;

        let client = test_client(&server.uri());
        let err = client.generate(&test_request()).await.unwrap_err();
        assert!(err.is_retryable());
        assert!(err.to_string().contains("UNAVAILABLE"), "got: {err}");
    }

    #[test]
    fn empty_api_key_is_a_config_error() {
        let result = GeminiClient::new(
            String::new(),
            "gemini-1.5-flash".into(),
            "http://localhost".into(),
            Duration::from_secs(5),
        );
        assert!(matches!(result, Err(VoxError::Config(_))));
    }
}
