//! leagueops - admin tooling for the draft league
//!
//! Collects the one-off maintenance jobs of a Pokémon draft-league web app into a
//! single command-line tool backed by a Supabase project.
//!
//! # Architecture Overview
//!
//! Each subcommand reads one input, transforms it in memory, and writes it back in full:
//!
//! - **Key-block reformatting** (`env-key`): PEM private keys in `.env` files are
//!   rewritten between multi-line, escaped single-line, base64 and commented forms
//! - **MCP registry patching** (`mcp`): entries under `mcpServers` in
//!   `.cursor/mcp.json` are added, replaced, listed or removed
//! - **Draft pool reporting** (`draft-pool`): counts and listings from the
//!   `draft_pool` table over PostgREST
//!
//! Every file rewrite is preceded by a checksum-verified backup next to the original
//! and performed with an atomic temp-file rename.
//!
//! # Core Modules
//!
//! ## Commands
//! - [`cli`] - argument parsing and command dispatch
//! - [`envkey`] - the private-key block reformatter
//! - [`mcp`] - the MCP server registry document
//! - [`report`] - draft pool summaries
//!
//! ## Supporting Modules
//! - [`supabase`] - PostgREST table queries and exact counts
//! - [`config`] - settings from the environment and dotenv files
//! - [`core`] - error types and user-facing error formatting
//! - [`utils`] - atomic writes, checksums and backups
//! - [`constants`] - default paths, variable names and limits

// Commands
pub mod cli;
pub mod envkey;
pub mod mcp;
pub mod report;

// Supporting modules
pub mod config;
pub mod constants;
pub mod core;
pub mod supabase;
pub mod utils;
