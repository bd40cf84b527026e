// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bearer-token authentication middleware.
//!
//! A valid bearer token authenticates the request as the `api_user`
//! principal. In development mode, unauthenticated requests run as the
//! anonymous `dev_user` principal. With no token configured and development
//! mode off, every request is rejected (fail-closed).

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

/// The authenticated principal, inserted as a request extension.
#[derive(Debug, Clone)]
pub struct Principal(pub String);

/// Authentication configuration for the gateway.
#[derive(Clone)]
pub struct AuthConfig {
    /// Expected bearer token. If `Some`, bearer auth is enabled.
    pub bearer_token: Option<String>,
    /// Development mode: unauthenticated requests pass as `dev_user`.
    pub dev_mode: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field(
                "bearer_token",
                &self.bearer_token.as_ref().map(|_| "[redacted]"),
            )
            .field("dev_mode", &self.dev_mode)
            .finish()
    }
}

/// Middleware validating the `Authorization: Bearer` header.
pub async fn auth_middleware(
    State(auth): State<AuthConfig>,
    mut request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if let Some(ref expected_token) = auth.bearer_token {
        let presented = request
            .headers()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "));

        if presented == Some(expected_token.as_str()) {
            request.extensions_mut().insert(Principal("api_user".into()));
            return Ok(next.run(request).await);
        }
    }

    if auth.dev_mode {
        request.extensions_mut().insert(Principal("dev_user".into()));
        return Ok(next.run(request).await);
    }

    if auth.bearer_token.is_none() {
        tracing::error!("gateway has no auth configured -- rejecting request");
    }
    Err(StatusCode::UNAUTHORIZED)
}
