// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loading.
//!
//! Configuration is assembled from three TOML locations merged over the
//! compiled defaults, lowest priority first: the system-wide file, the
//! user's XDG config, and the working directory. `VOXBRIDGE_`-prefixed
//! environment variables override everything, so a container deployment can
//! run with no file at all.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::VoxbridgeConfig;

/// A figment seeded with the compiled defaults.
fn defaults() -> Figment {
    Figment::from(Serialized::defaults(VoxbridgeConfig::default()))
}

/// Environment variable provider for the `VOXBRIDGE_` prefix.
///
/// Section names are mapped to dotted keys explicitly. A plain
/// `Env::split("_")` cannot tell `VOXBRIDGE_GEMINI_API_KEY` apart from a
/// hypothetical `gemini.api.key`, so each known section prefix is rewritten
/// once and the remainder of the name is left intact.
fn env_provider() -> Env {
    Env::prefixed("VOXBRIDGE_").map(|key| {
        key.as_str()
            .replacen("server_", "server.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("tavily_", "tavily.", 1)
            .replacen("firecrawl_", "firecrawl.", 1)
            .replacen("webhook_", "webhook.", 1)
            .replacen("session_", "session.", 1)
            .replacen("orchestrator_", "orchestrator.", 1)
            .into()
    })
}

/// Loads configuration from the standard file hierarchy plus environment
/// overrides.
pub fn load_config() -> Result<VoxbridgeConfig, figment::Error> {
    let user_config = dirs::config_dir()
        .map(|d| d.join("voxbridge/voxbridge.toml"))
        .unwrap_or_default();

    defaults()
        .merge(Toml::file("/etc/voxbridge/voxbridge.toml"))
        .merge(Toml::file(user_config))
        .merge(Toml::file("voxbridge.toml"))
        .merge(env_provider())
        .extract()
}

/// Loads configuration from inline TOML content, skipping the file hierarchy
/// and the environment. Intended for tests.
pub fn load_config_from_str(toml_content: &str) -> Result<VoxbridgeConfig, figment::Error> {
    defaults().merge(Toml::string(toml_content)).extract()
}

/// Loads configuration from one explicit file, with environment overrides
/// still applied on top.
pub fn load_config_from_path(path: &Path) -> Result<VoxbridgeConfig, figment::Error> {
    defaults()
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_loads_defaults() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config.server.port, 8600);
        assert_eq!(config.orchestrator.max_tool_rounds, 1);
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
            [server]
            port = 9000
            dev_mode = true

            [gemini]
            api_key = "test-key"

            [orchestrator]
            max_tool_rounds = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(config.server.dev_mode);
        assert_eq!(config.gemini.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.orchestrator.max_tool_rounds, 2);
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voxbridge.toml");
        std::fs::write(&path, "[server]\nport = 9100\n").unwrap();
        let config = load_config_from_path(&path).unwrap();
        assert_eq!(config.server.port, 9100);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = load_config_from_str(
            r#"
            [server]
            prot = 9000
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn unknown_section_is_rejected() {
        let result = load_config_from_str(
            r#"
            [nonsense]
            key = "value"
            "#,
        );
        assert!(result.is_err());
    }
}
