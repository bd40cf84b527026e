// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits implemented by the external-service client crates.

pub mod completion;
pub mod scrape;
pub mod search;

pub use completion::CompletionProvider;
pub use scrape::ScrapeProvider;
pub use search::SearchProvider;
