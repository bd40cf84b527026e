// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini provider adapter for Voxbridge.
//!
//! [`GeminiClient`] speaks the `generateContent` REST API and implements
//! [`voxbridge_core::CompletionProvider`] over the neutral completion model.

pub mod client;
pub mod provider;
pub mod types;

pub use client::GeminiClient;

use std::time::Duration;

use voxbridge_config::model::GeminiConfig;
use voxbridge_core::VoxError;

/// Builds a [`GeminiClient`] from the `[gemini]` config section.
pub fn client_from_config(config: &GeminiConfig) -> Result<GeminiClient, VoxError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or_else(|| VoxError::Config("gemini.api_key is not set".into()))?;
    GeminiClient::new(
        api_key,
        config.model.clone(),
        config.base_url.clone(),
        Duration::from_secs(config.timeout_secs),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_from_config_requires_api_key() {
        let config = GeminiConfig::default();
        assert!(matches!(
            client_from_config(&config),
            Err(VoxError::Config(_))
        ));
    }

    #[test]
    fn client_from_config_with_key_succeeds() {
        let config = GeminiConfig {
            api_key: Some("k".into()),
            ..GeminiConfig::default()
        };
        let client = client_from_config(&config).unwrap();
        assert_eq!(client.model(), "gemini-1.5-flash");
    }
}
