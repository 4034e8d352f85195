//! # vibe-core
//!
//! Core types, response validation, and the match calculation engine for MatchVibe.
//!
//! Two participants (host and guest) swipe like/dislike on a shared, ordered
//! question catalog. This crate turns their answers into a compatibility result:
//! - Entity structs for questions, responses, and match results
//! - Role and answer enums
//! - The readiness gate (`validator`) that decides when calculation may run
//! - The match calculator with its favorite/shared-item precedence policy
//! - Readiness progress reporting and session evaluation
//! - CLI response types
//!
//! Everything here is pure and synchronous. Fetching rows and persisting the
//! result belong to the caller.

pub mod calculator;
pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod evaluation;
pub mod messages;
pub mod readiness;
pub mod responses;
pub mod validator;

pub use calculator::{MatchCalculator, calculate_match};
pub use errors::CoreError;
pub use validator::{ValidationVerdict, validate_responses};
