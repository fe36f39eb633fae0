//! Constants used across the leagueops commands.
//!
//! Default file locations, environment variable names and request limits live here
//! so the CLI, the settings loader and the tests agree on them.

use std::time::Duration;

/// Environment file rewritten by `env-key` unless `--file` is given.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Editor MCP registry patched by `mcp` unless `--file` is given.
pub const DEFAULT_MCP_CONFIG: &str = ".cursor/mcp.json";

/// Dotenv file loaded before reading settings when present.
pub const DEFAULT_SETTINGS_FILE: &str = ".env.local";

/// Names a dotenv file to load instead of [`DEFAULT_SETTINGS_FILE`].
pub const ENV_FILE_VAR: &str = "LEAGUEOPS_ENV_FILE";

pub const SUPABASE_URL_VAR: &str = "NEXT_PUBLIC_SUPABASE_URL";
pub const SUPABASE_SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const SUPABASE_PROJECT_REF_VAR: &str = "SUPABASE_PROJECT_REF";
pub const SUPABASE_ACCESS_TOKEN_VAR: &str = "SUPABASE_ACCESS_TOKEN";

/// URL of the local Supabase stack started by `supabase start`.
pub const DEFAULT_SUPABASE_URL: &str = "http://127.0.0.1:54321";

/// Hosted Supabase MCP endpoint; the project ref is appended as a query parameter.
pub const SUPABASE_MCP_URL: &str = "https://mcp.supabase.com/mcp";

/// Table queried by `draft-pool` unless `--table` is given.
pub const DEFAULT_DRAFT_POOL_TABLE: &str = "draft_pool";

/// Rows listed for a single point value unless `--limit` is given.
pub const DEFAULT_ROW_LIMIT: usize = 50;

/// Timeout for a single PostgREST request (30 seconds).
///
/// Queries run sequentially, so a hung connection would otherwise stall the whole report.
pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
