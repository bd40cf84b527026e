// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Voxbridge backend.
//!
//! This crate provides the error type, the provider-neutral completion model,
//! session and profile types, and the collaborator traits implemented by the
//! external-service client crates.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::VoxError;
pub use traits::{CompletionProvider, ScrapeProvider, SearchProvider};
pub use types::{
    Candidate, ChatRole, ChatTurn, CompletionRequest, CompletionResponse, IntegrationConfig,
    IntegrationSetting, SamplingConfig, ScrapeFormat, ScrapedPage, SearchDepth, SearchResponse,
    SearchResult, SessionId, SessionStatus, SubjectProfile, ToolDeclaration, TurnPart,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vox_error_has_all_variants() {
        let _config = VoxError::Config("test".into());
        let _not_found = VoxError::NotFound {
            resource: "session",
            id: "s1".into(),
        };
        let _validation = VoxError::Validation("test".into());
        let _tool = VoxError::UnsupportedTool { name: "t".into() };
        let _external = VoxError::ExternalService {
            service: "gemini",
            message: "test".into(),
            source: None,
        };
        let _empty = VoxError::EmptyResponse;
        let _timeout = VoxError::Timeout {
            duration: std::time::Duration::from_secs(60),
        };
        let _internal = VoxError::Internal("test".into());
    }

    #[test]
    fn trait_objects_are_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn CompletionProvider>();
        assert_send_sync::<dyn SearchProvider>();
        assert_send_sync::<dyn ScrapeProvider>();
    }
}
