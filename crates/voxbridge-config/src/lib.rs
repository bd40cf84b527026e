// SPDX-FileCopyrightText: 2026 Voxbridge Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loading for the Voxbridge backend.
//!
//! TOML files merged with `VOXBRIDGE_`-prefixed environment variables via
//! Figment. See [`model::VoxbridgeConfig`] for the full schema.

pub mod loader;
pub mod model;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::VoxbridgeConfig;
