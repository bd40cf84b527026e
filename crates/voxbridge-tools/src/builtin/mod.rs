// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in tools.
//!
//! Three tools are always declared to every session (`generate_document`,
//! `search_web`, `scrape_website`); the rest are gated behind an integration
//! id on the subject profile.

mod api_request;
mod document;
mod domain;
mod placeholders;
mod scrape;
mod search;
mod webhook;

pub use api_request::ApiRequestTool;
pub use document::GenerateDocumentTool;
pub use domain::DomainCheckTool;
pub use placeholders::{GoogleSheetsTool, NotionTool};
pub use scrape::ScrapeWebsiteTool;
pub use search::SearchWebTool;
pub use webhook::TriggerWebhookTool;
