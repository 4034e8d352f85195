//! # vibe-schema
//!
//! JSON Schema generation and validation for MatchVibe.
//!
//! Entity types are defined in `vibe-core` with `#[derive(JsonSchema)]`.
//! This crate collects their schemas into a [`SchemaRegistry`] so raw JSON can
//! be checked at the boundary before it is deserialized into typed records,
//! and so the schemas can be exported (`vibe schema`).

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
