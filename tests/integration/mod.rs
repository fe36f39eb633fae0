//! Integration test suite for leagueops
//!
//! Each test runs the compiled binary in a fresh temporary directory.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **env_key**: private-key reformatting, backups and dry runs
//! - **mcp**: MCP registry patching and listing
//! - **draft_pool**: argument validation and configuration failures (no network)

#[path = "../common/mod.rs"]
mod common;

mod draft_pool;
mod env_key;
mod mcp;
