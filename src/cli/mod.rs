//! Command-line interface for leagueops.
//!
//! One binary, one subcommand per concern:
//!
//! - `env-key` - reformat private-key blocks in a `.env` file
//! - `mcp` - patch the editor's MCP server registry
//! - `draft-pool` - summarise the draft pool table
//!
//! # Global Options
//!
//! - `--verbose` / `-v`: debug logging on stderr
//! - `--quiet` / `-q`: only errors are logged
//! - `--env-file <PATH>`: dotenv file to load settings from (also `LEAGUEOPS_ENV_FILE`)
//!
//! `RUST_LOG` overrides both logging flags when set.
//!
//! # Examples
//!
//! ```bash
//! leagueops env-key escape-inline --file .env.local
//! leagueops mcp supabase
//! leagueops draft-pool 15 --limit 20
//! ```

mod draft_pool;
mod env_key;
mod mcp;


use crate::config::{SupabaseSettings, load_env_file};
use crate::constants::ENV_FILE_VAR;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

pub use draft_pool::DraftPoolCommand;
pub use env_key::EnvKeyCommand;
pub use mcp::McpCommand;

/// Runtime options derived from the global flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Default log filter when `RUST_LOG` is not set
    pub log_level: String,

    /// Dotenv file named on the command line or in `LEAGUEOPS_ENV_FILE`
    pub env_file: Option<PathBuf>,
}

impl CliConfig {
    /// Install the global tracing subscriber, writing to stderr.
    ///
    /// Safe to call more than once; later calls are ignored.
    pub fn init_logging(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .try_init();
    }
}

/// Admin tooling for the draft league.
#[derive(Parser)]
#[command(
    name = "leagueops",
    about = "Admin tooling for the draft league",
    version,
    long_about = "Reformat private keys in .env files, manage editor MCP servers and report on the Supabase draft pool."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Dotenv file to load settings from [default: .env.local when present]
    #[arg(long, global = true, value_name = "PATH", env = ENV_FILE_VAR)]
    env_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Reformat PEM private-key blocks in an environment file
    EnvKey(EnvKeyCommand),

    /// Add, update, list or remove MCP servers in the editor configuration
    Mcp(McpCommand),

    /// Summarise the draft pool by point value
    DraftPool(DraftPoolCommand),
}

impl Cli {
    /// Execute with the configuration derived from the global flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        };

        CliConfig {
            log_level: log_level.to_string(),
            env_file: self.env_file.clone(),
        }
    }

    /// Load settings, then run the selected subcommand.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::EnvKey(cmd) => cmd.execute().await,
            Commands::Mcp(cmd) => {
                load_env_file(config.env_file.as_deref());
                cmd.execute(&SupabaseSettings::from_env()).await
            }
            Commands::DraftPool(cmd) => {
                load_env_file(config.env_file.as_deref());
                cmd.execute(&SupabaseSettings::from_env()).await
            }
        }
    }
}
