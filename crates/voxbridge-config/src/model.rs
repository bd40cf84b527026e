// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Voxbridge backend.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so unrecognized keys are
//! rejected at startup with an actionable error instead of being silently
//! ignored.

use serde::{Deserialize, Serialize};

/// Top-level Voxbridge configuration.
///
/// Loaded from TOML files with environment variable overrides. All sections
/// are optional and default to sensible values; only the downstream API keys
/// have no default.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VoxbridgeConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Generative-language model API settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Web-search API settings.
    #[serde(default)]
    pub tavily: TavilyConfig,

    /// Web-scraping API settings.
    #[serde(default)]
    pub firecrawl: FirecrawlConfig,

    /// Outbound webhook settings.
    #[serde(default)]
    pub webhook: WebhookConfig,

    /// Voice session lifecycle settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// Completion orchestration settings.
    #[serde(default)]
    pub orchestrator: OrchestratorConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bearer token for the `/v1` API. `None` rejects all requests
    /// (fail-closed) except in development mode.
    #[serde(default)]
    pub bearer_token: Option<String>,

    /// Development mode: `/v1` requests without auth run as the anonymous
    /// principal `dev_user`. Never enable in production.
    #[serde(default)]
    pub dev_mode: bool,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            bearer_token: None,
            dev_mode: false,
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8600
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Generative-language model API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key. Required for the model client to start.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// API base URL. Overridable for testing.
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    /// Request-level timeout in seconds.
    #[serde(default = "default_gemini_timeout")]
    pub timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: default_gemini_base_url(),
            timeout_secs: default_gemini_timeout(),
        }
    }
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_timeout() -> u64 {
    60
}

/// Web-search API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TavilyConfig {
    /// API key. When absent, the search tool reports a configuration error.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL.
    #[serde(default = "default_tavily_base_url")]
    pub base_url: String,

    /// Request-level timeout in seconds.
    #[serde(default = "default_integration_timeout")]
    pub timeout_secs: u64,
}

impl Default for TavilyConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_tavily_base_url(),
            timeout_secs: default_integration_timeout(),
        }
    }
}

fn default_tavily_base_url() -> String {
    "https://api.tavily.com".to_string()
}

fn default_integration_timeout() -> u64 {
    30
}

/// Web-scraping API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FirecrawlConfig {
    /// API key. When absent, the scrape tool reports a configuration error.
    #[serde(default)]
    pub api_key: Option<String>,

    /// API base URL.
    #[serde(default = "default_firecrawl_base_url")]
    pub base_url: String,

    /// Request-level timeout in seconds.
    #[serde(default = "default_integration_timeout")]
    pub timeout_secs: u64,
}

impl Default for FirecrawlConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_firecrawl_base_url(),
            timeout_secs: default_integration_timeout(),
        }
    }
}

fn default_firecrawl_base_url() -> String {
    "https://api.firecrawl.dev".to_string()
}

/// Outbound webhook configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WebhookConfig {
    /// Target URL for `trigger_webhook`. When absent the tool reports an
    /// in-band configuration error instead of failing the session.
    #[serde(default)]
    pub url: Option<String>,

    /// Request-level timeout in seconds.
    #[serde(default = "default_integration_timeout")]
    pub timeout_secs: u64,
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: default_integration_timeout(),
        }
    }
}

/// Voice session lifecycle configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Maximum session age in seconds before the sweep purges it.
    #[serde(default = "default_max_age")]
    pub max_age_secs: u64,

    /// Ephemeral credential lifetime in seconds.
    #[serde(default = "default_token_ttl")]
    pub token_ttl_secs: u64,

    /// Interval between expiry sweeps in seconds.
    #[serde(default = "default_sweep_interval")]
    pub sweep_interval_secs: u64,

    /// Secret for signing ephemeral credentials. A random secret is generated
    /// at startup when unset, which invalidates credentials across restarts.
    #[serde(default)]
    pub token_secret: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_age_secs: default_max_age(),
            token_ttl_secs: default_token_ttl(),
            sweep_interval_secs: default_sweep_interval(),
            token_secret: None,
        }
    }
}

fn default_max_age() -> u64 {
    7200
}

fn default_token_ttl() -> u64 {
    3600
}

fn default_sweep_interval() -> u64 {
    300
}

/// Completion orchestration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OrchestratorConfig {
    /// Maximum tool-execution rounds per user turn.
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: u32,

    /// Trailing window of prior turns sent with each request.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self {
            max_tool_rounds: default_max_tool_rounds(),
            history_window: default_history_window(),
        }
    }
}

fn default_max_tool_rounds() -> u32 {
    1
}

fn default_history_window() -> usize {
    10
}
