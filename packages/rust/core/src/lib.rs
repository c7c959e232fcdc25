//! Core pipeline orchestration for entitydoc.
//!
//! Ties record loading, renderer dispatch, comment formatting, and template
//! rendering into the end-to-end `generate` workflow.

pub mod pipeline;

pub use pipeline::{GenerateResult, RenderOptions, generate};
