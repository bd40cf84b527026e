// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error-to-HTTP mapping for the gateway.
//!
//! Every handler returns `Result<_, ApiError>`; the error body is always
//! `{"error": "..."}` with the display message and never a stack trace.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use voxbridge_core::VoxError;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Wrapper making [`VoxError`] an axum response.
#[derive(Debug)]
pub struct ApiError(pub VoxError);

impl From<VoxError> for ApiError {
    fn from(err: VoxError) -> Self {
        Self(err)
    }
}

/// Maps the error taxonomy onto HTTP statuses.
pub fn status_for(err: &VoxError) -> StatusCode {
    match err {
        VoxError::NotFound { .. } => StatusCode::NOT_FOUND,
        VoxError::Validation(_) | VoxError::UnsupportedTool { .. } => StatusCode::BAD_REQUEST,
        VoxError::ExternalService { .. } => StatusCode::BAD_GATEWAY,
        VoxError::Timeout { .. } => StatusCode::GATEWAY_TIMEOUT,
        VoxError::Config(_) | VoxError::EmptyResponse | VoxError::Internal(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, status = %status, "request failed");
        } else {
            tracing::debug!(error = %self.0, status = %status, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_maps_to_expected_statuses() {
        assert_eq!(
            status_for(&VoxError::session_not_found("x")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&VoxError::Validation("bad".into())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&VoxError::UnsupportedTool { name: "x".into() }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&VoxError::ExternalService {
                service: "tavily",
                message: "503".into(),
                source: None,
            }),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            status_for(&VoxError::Timeout {
                duration: std::time::Duration::from_secs(60)
            }),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            status_for(&VoxError::EmptyResponse),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
