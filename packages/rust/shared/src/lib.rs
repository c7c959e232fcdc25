//! Shared types, error model, and configuration for entitydoc.
//!
//! This crate is the foundation depended on by all other entitydoc crates.
//! It provides:
//! - [`EntitydocError`] — the unified error type
//! - Domain types ([`EntityRecord`], [`RenderableMapping`])
//! - Configuration ([`AppConfig`], [`ImagePathStrategy`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, ImagePathStrategy, RenderConfig, config_dir, config_file_path,
    init_config, load_config, load_config_from,
};
pub use error::{EntitydocError, Result};
pub use types::{EntityRecord, RenderableMapping};
