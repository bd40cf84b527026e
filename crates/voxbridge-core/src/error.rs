// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Voxbridge backend.

use thiserror::Error;

/// The primary error type used across all Voxbridge crates.
///
/// Variants map onto the HTTP surface in the gateway: `NotFound` -> 404,
/// `Validation` and `UnsupportedTool` -> 400, `ExternalService` -> 502,
/// `Timeout` -> 504, everything else -> 500.
#[derive(Debug, Error)]
pub enum VoxError {
    /// Configuration errors (missing API key, invalid TOML, bad field values).
    #[error("configuration error: {0}")]
    Config(String),

    /// A session, document, or other addressable entity does not exist.
    #[error("{resource} not found: {id}")]
    NotFound {
        resource: &'static str,
        id: String,
    },

    /// Missing or empty required input from the caller.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested tool name is not in the registry.
    #[error("unsupported tool: {name}")]
    UnsupportedTool { name: String },

    /// A downstream API returned a non-success status or the network failed.
    ///
    /// Retryable by policy; callers that cannot retry degrade instead.
    #[error("{service} error: {message}")]
    ExternalService {
        service: &'static str,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The language model returned no usable candidates or parts.
    ///
    /// Logged distinctly from `ExternalService`: the call succeeded at the
    /// transport level but violated the response contract.
    #[error("model returned an empty response")]
    EmptyResponse,

    /// An outbound call exceeded its request-level deadline.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl VoxError {
    /// Shorthand for a `NotFound` over a session id.
    pub fn session_not_found(id: impl Into<String>) -> Self {
        VoxError::NotFound {
            resource: "session",
            id: id.into(),
        }
    }

    /// Returns true for errors worth retrying at the call site.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            VoxError::ExternalService { .. } | VoxError::Timeout { .. }
        )
    }
}
