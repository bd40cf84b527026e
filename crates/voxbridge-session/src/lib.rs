// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Voice session core: store, lifecycle, credential issuance, and dispatch.
//!
//! Sessions live in one process-wide [`SessionStore`] behind per-session
//! locks. The [`SessionManager`] owns creation, termination, context reads,
//! and the periodic expiry sweep; the [`FunctionCallDispatcher`] routes the
//! model's tool invocations and keeps the append-only interaction log.

pub mod dispatch;
pub mod manager;
pub mod prompt;
pub mod store;
pub mod token;

pub use dispatch::FunctionCallDispatcher;
pub use manager::{SessionContext, SessionDescriptor, SessionManager};
pub use prompt::build_system_prompt;
pub use store::{InteractionRecord, Session, SessionEntry, SessionStore};
pub use token::{TokenClaims, TokenSigner};
