// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion orchestration for Voxbridge.
//!
//! [`ChatOrchestrator`] runs the two-phase tool-calling loop against a live
//! session; [`ResponseGenerator`] covers the tool-free paths: single-turn
//! replies with persona/knowledge-base context and degraded-on-failure
//! document summaries.

pub mod chat;
pub mod reply;

pub use chat::{ChatOrchestrator, FALLBACK_REPLY};
pub use reply::{ChatMessage, DocumentInfo, ResponseGenerator};
