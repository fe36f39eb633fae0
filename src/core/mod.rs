//! Core types shared by every command.
//!
//! - [`LeagueOpsError`] enumerates the failure modes commands can raise
//! - [`ErrorContext`] pairs an error with the suggestion shown to the operator
//! - [`user_friendly_error`] converts any `anyhow::Error` at the top-level boundary

pub mod error;

pub use error::{ErrorContext, LeagueOpsError, user_friendly_error};
