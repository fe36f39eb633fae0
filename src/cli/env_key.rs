//! `leagueops env-key`: rewrite private-key blocks in an environment file.
//!
//! The file is read once and transformed in memory. Before anything is written, a
//! timestamped backup is taken and verified against the content that was transformed.
//! With `--dry-run` the new content goes to stdout and nothing on disk changes.

use crate::constants::DEFAULT_ENV_FILE;
use crate::core::LeagueOpsError;
use crate::envkey::{Mode, ReformatOptions, ambiguous_keys, reformat_with};
use crate::utils::fs::{calculate_checksum, checksum_bytes, read_text_file, write_text_file};
use crate::utils::{BackupManager, backup_matches};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reformat PEM private-key blocks in an environment file.
#[derive(Debug, Args)]
pub struct EnvKeyCommand {
    /// How to rewrite the blocks
    #[arg(value_enum)]
    mode: Mode,

    /// Environment file to rewrite
    #[arg(short, long, default_value = DEFAULT_ENV_FILE)]
    file: PathBuf,

    /// Only rewrite this variable (repeatable)
    #[arg(long = "var", value_name = "NAME")]
    vars: Vec<String>,

    /// Print the rewritten file instead of saving it
    #[arg(long)]
    dry_run: bool,
}

impl EnvKeyCommand {
    pub async fn execute(self) -> Result<()> {
        let content = read_text_file(&self.file)?;
        debug!("Read {} bytes from {}", content.len(), self.file.display());

        for name in ambiguous_keys(&content) {
            warn!(
                "{name} is defined both commented out and active in {}; only the active value is loaded",
                self.file.display()
            );
        }

        let options = ReformatOptions {
            only: self.vars.clone(),
        };
        let result = reformat_with(&content, self.mode, &options);

        for name in &self.vars {
            if !result.blocks.contains(name) {
                warn!("No {} block found for {name}", self.mode);
            }
        }

        if !result.changed {
            println!(
                "{} No private key blocks to {} in {}",
                "•".cyan(),
                self.mode,
                self.file.display()
            );
            return Ok(());
        }

        if self.dry_run {
            print!("{}", result.content);
            return Ok(());
        }

        let backup = BackupManager::new(self.file.clone());
        backup.create_backup()?;
        if !backup_matches(backup.backup_path(), &content)? {
            return Err(LeagueOpsError::BackupMismatch {
                path: self.file.display().to_string(),
                expected: checksum_bytes(content.as_bytes()),
                actual: calculate_checksum(backup.backup_path())?,
            }
            .into());
        }

        write_text_file(&self.file, &result.content)?;

        println!(
            "{} Applied {} to {} in {}",
            "✓".green(),
            self.mode.to_string().bold(),
            result.blocks.join(", "),
            self.file.display()
        );
        println!("  Backup: {}", backup.backup_path().display());
        Ok(())
    }
}
