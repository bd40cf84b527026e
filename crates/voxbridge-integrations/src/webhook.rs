// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound webhook delivery.

use std::time::Duration;

use chrono::Utc;
use serde_json::Value;
use tracing::info;
use voxbridge_core::VoxError;

/// Posts action notifications to a configured webhook URL.
///
/// Deliveries are never retried: the receiving end may mutate state on each
/// POST, so a duplicate is worse than a miss.
#[derive(Debug, Clone)]
pub struct WebhookSender {
    client: reqwest::Client,
    url: String,
}

impl WebhookSender {
    pub fn new(url: String, timeout: Duration) -> Result<Self, VoxError> {
        if url.is_empty() {
            return Err(VoxError::Config("webhook url is not set".into()));
        }
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VoxError::ExternalService {
                service: "webhook",
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self { client, url })
    }

    /// Sends one `{action, timestamp, data}` payload. Returns the receiver's
    /// HTTP status code on success.
    pub async fn trigger(&self, action: &str, data: Value) -> Result<u16, VoxError> {
        let payload = serde_json::json!({
            "action": action,
            "timestamp": Utc::now().to_rfc3339(),
            "data": data,
        });

        let response = self
            .client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    VoxError::Timeout {
                        duration: Duration::from_secs(30),
                    }
                } else {
                    VoxError::ExternalService {
                        service: "webhook",
                        message: format!("webhook delivery failed: {e}"),
                        source: Some(Box::new(e)),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoxError::ExternalService {
                service: "webhook",
                message: format!("webhook receiver returned {status}: {body}"),
                source: None,
            });
        }

        info!(action, status = status.as_u16(), "webhook delivered");
        Ok(status.as_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn trigger_posts_action_payload() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "action": "session_ended",
                "data": {"session_id": "abc"}
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let sender = WebhookSender::new(server.uri(), Duration::from_secs(5)).unwrap();
        let status = sender
            .trigger("session_ended", serde_json::json!({"session_id": "abc"}))
            .await
            .unwrap();
        assert_eq!(status, 200);
    }

    #[tokio::test]
    async fn trigger_does_not_retry_transient_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let sender = WebhookSender::new(server.uri(), Duration::from_secs(5)).unwrap();
        let err = sender
            .trigger("ping", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            VoxError::ExternalService { service: "webhook", .. }
        ));
    }

    #[test]
    fn empty_url_is_a_config_error() {
        let result = WebhookSender::new(String::new(), Duration::from_secs(1));
        assert!(matches!(result, Err(VoxError::Config(_))));
    }
}
