//! `leagueops mcp`: manage remote MCP servers in the editor configuration.
//!
//! ```bash
//! leagueops mcp set github --url https://api.githubcopilot.com/mcp/ --header "Authorization=Bearer $TOKEN"
//! leagueops mcp supabase
//! leagueops mcp list
//! leagueops mcp remove github
//! ```
//!
//! Writes replace the named entry as a whole and leave every other key untouched.

use crate::config::SupabaseSettings;
use crate::constants::DEFAULT_MCP_CONFIG;
use crate::mcp::{McpConfig, McpServerConfig, ServerListing, TransportType, parse_header};
use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use std::path::PathBuf;

/// Command for managing MCP server entries.
#[derive(Debug, Args)]
pub struct McpCommand {
    /// MCP configuration file to patch
    #[arg(short, long, global = true, default_value = DEFAULT_MCP_CONFIG)]
    file: PathBuf,

    #[command(subcommand)]
    subcommand: McpSubcommand,
}

#[derive(Debug, Subcommand)]
enum McpSubcommand {
    /// Add or replace an HTTP MCP server
    Set {
        /// Server name under mcpServers
        name: String,

        /// Endpoint URL
        #[arg(long)]
        url: String,

        /// Transport the endpoint speaks
        #[arg(long = "type", value_enum, default_value_t = TransportType::Http)]
        transport: TransportType,

        /// Header sent with every request, as NAME=VALUE (repeatable)
        #[arg(long = "header", value_name = "NAME=VALUE")]
        headers: Vec<String>,

        /// Note stored with the entry
        #[arg(long)]
        description: Option<String>,

        /// Print the patched file instead of saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// Add or replace the hosted Supabase MCP server for this project
    ///
    /// Reads SUPABASE_PROJECT_REF and SUPABASE_ACCESS_TOKEN.
    Supabase {
        /// Server name under mcpServers
        #[arg(long, default_value = "supabase")]
        name: String,

        /// Print the patched file instead of saving it
        #[arg(long)]
        dry_run: bool,
    },

    /// List configured MCP servers
    List,

    /// Remove an MCP server
    Remove {
        /// Server name under mcpServers
        name: String,

        /// Print the patched file instead of saving it
        #[arg(long)]
        dry_run: bool,
    },
}

impl McpCommand {
    pub async fn execute(self, settings: &SupabaseSettings) -> Result<()> {
        let mut config = McpConfig::load_or_default(&self.file)?;

        match self.subcommand {
            McpSubcommand::Set {
                name,
                url,
                transport,
                headers,
                description,
                dry_run,
            } => {
                let mut entry = McpServerConfig::new(transport, url);
                for raw in &headers {
                    let (header, value) = parse_header(raw)?;
                    entry = entry.with_header(header, value);
                }
                if let Some(description) = description {
                    entry = entry.with_description(description);
                }
                set_entry(&mut config, &name, &entry, dry_run)
            }
            McpSubcommand::Supabase {
                name,
                dry_run,
            } => {
                let (project_ref, token) = settings.require_management()?;
                set_entry(&mut config, &name, &McpServerConfig::supabase(project_ref, token), dry_run)
            }
            McpSubcommand::List => {
                list_servers(&config);
                Ok(())
            }
            McpSubcommand::Remove {
                name,
                dry_run,
            } => {
                if !config.remove_server(&name) {
                    println!(
                        "{} No MCP server named '{name}' in {}; nothing to remove",
                        "•".cyan(),
                        config.path().display()
                    );
                    return Ok(());
                }
                persist(&config, dry_run)?;
                if !dry_run {
                    println!("{} Removed MCP server '{name}'", "✓".green());
                }
                Ok(())
            }
        }
    }
}

fn set_entry(config: &mut McpConfig, name: &str, entry: &McpServerConfig, dry_run: bool) -> Result<()> {
    let replaced = config.set_server(name, entry)?;
    persist(config, dry_run)?;
    if !dry_run {
        let verb = if replaced { "Updated" } else { "Added" };
        println!("{} {verb} MCP server '{name}' -> {}", "✓".green(), entry.url);
    }
    Ok(())
}

fn persist(config: &McpConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config.to_pretty_string()?);
        return Ok(());
    }
    if let Some(backup) = config.save()? {
        println!("  Backup: {}", backup.display());
    }
    Ok(())
}

fn list_servers(config: &McpConfig) {
    let servers = config.servers();
    if servers.is_empty() {
        println!("No MCP servers configured in {}", config.path().display());
        return;
    }

    println!("MCP servers in {}:", config.path().display());
    for (name, listing) in servers {
        match listing {
            ServerListing::Http(entry) => {
                println!("  {} {} ({}) {}", "✓".green(), name.bold(), entry.r#type, entry.url);
            }
            ServerListing::Unrecognised(_) => {
                println!("  {} {} (unrecognised entry)", "•".yellow(), name.bold());
            }
        }
    }
}
