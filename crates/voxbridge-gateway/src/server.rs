// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. The `/v1` surface sits
//! behind the bearer-auth middleware; `/health` is public.

use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::{Router, middleware as axum_middleware};
use tower_http::cors::CorsLayer;
use voxbridge_core::VoxError;
use voxbridge_orchestrator::{ChatOrchestrator, ResponseGenerator};
use voxbridge_session::{FunctionCallDispatcher, SessionManager};

use crate::auth::{AuthConfig, auth_middleware};
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct GatewayState {
    pub manager: Arc<SessionManager>,
    pub dispatcher: Arc<FunctionCallDispatcher>,
    pub orchestrator: Arc<ChatOrchestrator>,
    pub generator: Arc<ResponseGenerator>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

/// Builds the full application router.
pub fn build_router(state: GatewayState, auth: AuthConfig) -> Router {
    let public_routes = Router::new()
        .route("/health", get(handlers::health))
        .with_state(state.clone());

    let api_routes = Router::new()
        .route("/v1/voice/sessions", post(handlers::create_session))
        .route(
            "/v1/voice/sessions/{id}/function-call",
            post(handlers::function_call),
        )
        .route(
            "/v1/voice/sessions/{id}/context",
            get(handlers::get_context),
        )
        .route("/v1/voice/sessions/{id}/end", post(handlers::end_session))
        .route("/v1/ai/generate-response", post(handlers::generate_response))
        .route("/v1/ai/chat", post(handlers::chat))
        .route(
            "/v1/ai/summarize-document",
            post(handlers::summarize_document),
        )
        .route("/v1/ai/models", get(handlers::list_models))
        .route_layer(axum_middleware::from_fn_with_state(auth, auth_middleware))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Starts the gateway server on `host:port` and serves until the process
/// exits or `shutdown` resolves.
pub async fn start_server(
    host: &str,
    port: u16,
    state: GatewayState,
    auth: AuthConfig,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), VoxError> {
    let app = build_router(state, auth);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| VoxError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| VoxError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
