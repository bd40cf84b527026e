// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway exposing the Voxbridge voice session and AI APIs.
//!
//! Routes are grouped under `/v1` behind bearer-token authentication;
//! `/health` stays public for load-balancer probes. Handlers are thin
//! adapters over the session manager, dispatcher, and orchestrators from
//! the library crates.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;

pub use auth::{AuthConfig, Principal};
pub use error::{ApiError, ErrorBody};
pub use server::{GatewayState, build_router, start_server};
