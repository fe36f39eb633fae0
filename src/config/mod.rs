//! Runtime settings for the commands that talk to Supabase.
//!
//! Nothing secret is compiled in. Settings come from the process environment, which
//! may first be seeded from a dotenv file:
//!
//! 1. the path given with `--env-file`, or
//! 2. the path in `LEAGUEOPS_ENV_FILE`, or
//! 3. `.env.local` in the working directory, when it exists.
//!
//! Variables already present in the environment are never overridden by the file.
//!
//! | Variable | Used by | Default |
//! |----------|---------|---------|
//! | `NEXT_PUBLIC_SUPABASE_URL` | `draft-pool` | `http://127.0.0.1:54321` |
//! | `SUPABASE_SERVICE_ROLE_KEY` | `draft-pool` | required unless the URL is local |
//! | `SUPABASE_PROJECT_REF` | `mcp supabase` | required |
//! | `SUPABASE_ACCESS_TOKEN` | `mcp supabase` | required |

use crate::constants::{
    DEFAULT_SETTINGS_FILE, DEFAULT_SUPABASE_URL, SUPABASE_ACCESS_TOKEN_VAR,
    SUPABASE_PROJECT_REF_VAR, SUPABASE_SERVICE_ROLE_KEY_VAR, SUPABASE_URL_VAR,
};
use crate::core::LeagueOpsError;
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Connection settings for the Supabase project.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SupabaseSettings {
    /// Base URL, without trailing slash
    pub url: String,
    pub service_role_key: Option<String>,
    pub project_ref: Option<String>,
    pub access_token: Option<String>,
}

impl std::fmt::Debug for SupabaseSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            if value.is_some() { "<set>" } else { "<unset>" }
        }
        f.debug_struct("SupabaseSettings")
            .field("url", &self.url)
            .field("service_role_key", &redact(&self.service_role_key))
            .field("project_ref", &self.project_ref)
            .field("access_token", &redact(&self.access_token))
            .finish()
    }
}

impl SupabaseSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let url = get(SUPABASE_URL_VAR).unwrap_or_else(|| DEFAULT_SUPABASE_URL.to_string());

        Self {
            url: url.trim_end_matches('/').to_string(),
            service_role_key: get(SUPABASE_SERVICE_ROLE_KEY_VAR),
            project_ref: get(SUPABASE_PROJECT_REF_VAR),
            access_token: get(SUPABASE_ACCESS_TOKEN_VAR),
        }
    }

    /// True when the URL points at a Supabase stack on this machine.
    pub fn is_local(&self) -> bool {
        let rest = self
            .url
            .strip_prefix("http://")
            .or_else(|| self.url.strip_prefix("https://"))
            .unwrap_or(&self.url);
        let host = rest.split(['/', ':']).next().unwrap_or_default();
        matches!(host, "localhost" | "127.0.0.1")
    }

    /// The key to send with table queries.
    ///
    /// A local stack accepts requests without one; anything else fails fast with a
    /// [`LeagueOpsError::ConfigError`].
    pub fn require_service_key(&self) -> Result<Option<&str>> {
        match (&self.service_role_key, self.is_local()) {
            (Some(key), _) => Ok(Some(key.as_str())),
            (None, true) => {
                debug!("No service role key set; using the local stack without one");
                Ok(None)
            }
            (None, false) => Err(LeagueOpsError::ConfigError {
                message: format!(
                    "{SUPABASE_SERVICE_ROLE_KEY_VAR} is required for remote project {}",
                    self.url
                ),
            }
            .into()),
        }
    }

    /// Project ref and access token for the hosted MCP endpoint.
    pub fn require_management(&self) -> Result<(&str, &str)> {
        let project_ref = self.project_ref.as_deref().ok_or_else(|| missing(SUPABASE_PROJECT_REF_VAR))?;
        let token = self.access_token.as_deref().ok_or_else(|| missing(SUPABASE_ACCESS_TOKEN_VAR))?;
        Ok((project_ref, token))
    }
}

fn missing(var: &str) -> anyhow::Error {
    LeagueOpsError::ConfigError {
        message: format!("{var} is not set"),
    }
    .into()
}

/// Seed the environment from a dotenv file.
///
/// An explicit path (`--env-file` or `LEAGUEOPS_ENV_FILE`) that cannot be loaded is
/// reported as a warning; a missing default `.env.local` is silently skipped. Returns the
/// path that was loaded, if any.
pub fn load_env_file(explicit: Option<&Path>) -> Option<PathBuf> {
    let (path, is_explicit) = match explicit {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    match dotenv::from_path(&path) {
        Ok(()) => {
            debug!("Loaded settings from {}", path.display());
            Some(path)
        }
        Err(e) if is_explicit => {
            warn!("Could not load settings file {}: {e}", path.display());
            None
        }
        Err(e) => {
            debug!("No settings loaded from {}: {e}", path.display());
            None
        }
    }
}
