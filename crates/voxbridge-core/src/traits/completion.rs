// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion provider trait for language-model integrations.

use async_trait::async_trait;

use crate::error::VoxError;
use crate::types::{CompletionRequest, CompletionResponse};

/// Adapter for a generative-language model API.
///
/// Implementations own the wire format, authentication, timeouts, and retry
/// policy. Callers only see the neutral completion model from
/// [`crate::types`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends a completion request and returns all candidates.
    ///
    /// Fails with [`VoxError::ExternalService`] on non-success status or
    /// network failure, never with an empty `Ok` -- an empty candidate list is
    /// a valid (if contract-violating) response the caller inspects itself.
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, VoxError>;
}
