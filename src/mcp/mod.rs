//! MCP server registry management for the editor configuration file.
//!
//! The editor reads remote MCP endpoints from `.cursor/mcp.json`:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "supabase": {
//!       "type": "http",
//!       "url": "https://mcp.supabase.com/mcp?project_ref=abcd",
//!       "headers": { "Authorization": "Bearer sbp_..." }
//!     }
//!   }
//! }
//! ```
//!
//! [`McpConfig`] patches one entry at a time and leaves the rest of the document alone.
//! Existing files are backed up before each write.

mod config;
mod models;

pub use config::{MCP_SERVERS_KEY, McpConfig, ServerListing};
pub use models::{McpServerConfig, TransportType, parse_header};

#[cfg(test)]
mod tests;
