// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared retry helper for the integration HTTP clients.

use std::time::Duration;

use rand::Rng;
use tracing::warn;
use voxbridge_core::VoxError;

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
pub(crate) fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503)
}

/// Sends a request built by `build`, retrying once on a transient status.
///
/// `timeout` is only used to label [`VoxError::Timeout`]; the deadline itself
/// lives on the underlying `reqwest::Client`.
pub(crate) async fn send_with_retry<F>(
    service: &'static str,
    timeout: Duration,
    build: F,
) -> Result<reqwest::Response, VoxError>
where
    F: Fn() -> reqwest::RequestBuilder,
{
    let mut last_error = None;

    for attempt in 0..=1u32 {
        if attempt > 0 {
            let jitter_ms = rand::thread_rng().gen_range(0..250);
            warn!(service, attempt, "retrying request after transient error");
            tokio::time::sleep(Duration::from_millis(1000 + jitter_ms)).await;
        }

        let response = build().send().await.map_err(|e| {
            if e.is_timeout() {
                VoxError::Timeout { duration: timeout }
            } else {
                VoxError::ExternalService {
                    service,
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                }
            }
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = VoxError::ExternalService {
            service,
            message: format!("API returned {status}: {body}"),
            source: None,
        };
        if is_transient_error(status) && attempt == 0 {
            warn!(service, status = %status, "transient error, will retry");
            last_error = Some(err);
            continue;
        }
        return Err(err);
    }

    Err(last_error.unwrap_or(VoxError::ExternalService {
        service,
        message: "request failed after retries".into(),
        source: None,
    }))
}
