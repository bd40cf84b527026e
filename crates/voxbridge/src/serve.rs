// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `voxbridge serve` command implementation.
//!
//! Wires the configured model provider, integration clients, tool registry,
//! session manager, and orchestrators into the gateway, then serves until a
//! shutdown signal arrives. A background task sweeps expired sessions.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use voxbridge_config::VoxbridgeConfig;
use voxbridge_core::{CompletionProvider, ScrapeProvider, SearchProvider, VoxError};
use voxbridge_gateway::{AuthConfig, GatewayState, start_server};
use voxbridge_integrations::{DomainChecker, WebhookSender};
use voxbridge_orchestrator::{ChatOrchestrator, ResponseGenerator};
use voxbridge_session::{FunctionCallDispatcher, SessionManager, SessionStore, TokenSigner};
use voxbridge_tools::standard_registry;

/// Runs the `voxbridge serve` command.
pub async fn run_serve(config: VoxbridgeConfig) -> Result<(), VoxError> {
    init_tracing(&config.server.log_level);

    info!("starting voxbridge serve");

    // Fail-closed: refuse to start the API surface with no auth configured.
    if config.server.bearer_token.is_none() && !config.server.dev_mode {
        return Err(VoxError::Config(
            "gateway has no authentication configured. \
             Set server.bearer_token or enable server.dev_mode for local use."
                .into(),
        ));
    }
    if config.server.dev_mode {
        warn!("development mode enabled: unauthenticated requests run as dev_user");
    }

    // Model provider.
    let provider: Arc<dyn CompletionProvider> = {
        let client = voxbridge_gemini::client_from_config(&config.gemini).map_err(|e| {
            error!(error = %e, "failed to initialize model provider");
            eprintln!(
                "error: Gemini API key required. Set gemini.api_key in voxbridge.toml \
                 or the VOXBRIDGE_GEMINI_API_KEY environment variable."
            );
            e
        })?;
        info!(model = client.model(), "model provider initialized");
        Arc::new(client)
    };

    // Integration clients.
    let search: Arc<dyn SearchProvider> =
        Arc::new(voxbridge_integrations::tavily_from_config(&config.tavily)?);
    let scrape: Arc<dyn ScrapeProvider> = Arc::new(
        voxbridge_integrations::firecrawl_from_config(&config.firecrawl)?,
    );
    let domain_checker = DomainChecker::new(Duration::from_secs(30))?;
    let webhook = match config.webhook.url {
        Some(ref url) => Some(WebhookSender::new(
            url.clone(),
            Duration::from_secs(config.webhook.timeout_secs),
        )?),
        None => {
            info!("webhook url not configured: trigger_webhook will report an error in-band");
            None
        }
    };

    // Tool registry with the built-in tool set.
    let registry = Arc::new(standard_registry(search, scrape, domain_checker, webhook)?);
    info!(tools = registry.len(), "tool registry initialized");

    // Session layer.
    let signer = match config.session.token_secret {
        Some(ref secret) => TokenSigner::new(secret.as_bytes().to_vec()),
        None => {
            warn!("session.token_secret not set: ephemeral credentials will not survive restarts");
            TokenSigner::random()
        }
    };
    let store = Arc::new(SessionStore::new());
    let manager = Arc::new(SessionManager::new(
        Arc::clone(&store),
        Arc::clone(&registry),
        signer,
        config.session.token_ttl_secs,
        config.session.max_age_secs,
    ));
    let dispatcher = Arc::new(FunctionCallDispatcher::new(
        Arc::clone(&store),
        Arc::clone(&registry),
    ));

    // Orchestration layer.
    let orchestrator = Arc::new(ChatOrchestrator::new(
        Arc::clone(&provider),
        Arc::clone(&store),
        Arc::clone(&dispatcher),
        config.orchestrator.max_tool_rounds,
        config.orchestrator.history_window,
    ));
    let generator = Arc::new(ResponseGenerator::new(provider));

    let state = GatewayState {
        manager: Arc::clone(&manager),
        dispatcher,
        orchestrator,
        generator,
        start_time: Instant::now(),
    };
    let auth = AuthConfig {
        bearer_token: config.server.bearer_token.clone(),
        dev_mode: config.server.dev_mode,
    };

    let cancel = CancellationToken::new();

    // Shutdown signal handler.
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "failed to listen for shutdown signal");
                return;
            }
            info!("shutdown signal received");
            cancel.cancel();
        });
    }

    // Expiry sweep background task.
    {
        let manager = Arc::clone(&manager);
        let sweep_cancel = cancel.clone();
        let interval_secs = config.session.sweep_interval_secs;
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
            // Skip the first immediate tick.
            interval.tick().await;

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let purged = manager.sweep_expired().await;
                        if purged > 0 {
                            info!(purged, "expired sessions purged");
                        }
                    }
                    _ = sweep_cancel.cancelled() => {
                        info!("expiry sweep shutting down");
                        break;
                    }
                }
            }
        });
        info!(interval_secs, "expiry sweep started");
    }

    start_server(
        &config.server.host,
        config.server.port,
        state,
        auth,
        cancel.cancelled_owned(),
    )
    .await?;

    info!("voxbridge serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("voxbridge={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
