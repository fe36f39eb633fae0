use crate::core::LeagueOpsError;
use crate::utils::fs::{calculate_checksum, checksum_bytes};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Timestamp format embedded in backup names, e.g. `20261019T142501Z`.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Manages the pre-write backup of a file that is about to be overwritten.
///
/// Every command that rewrites a file uses the same convention: a sibling file named
/// `<name>.backup.<UTC timestamp>`, e.g. `.env.backup.20261019T142501Z`. Backups are
/// never overwritten; when two runs land in the same second the later one gets a `-1`,
/// `-2`, ... suffix.
///
/// After copying, the backup is verified against the original by SHA-256 checksum, so a
/// successful [`create_backup`](Self::create_backup) guarantees a byte-identical copy
/// exists before the caller replaces the original.
///
/// # Examples
///
/// ```rust,no_run
/// use leagueops_cli::utils::BackupManager;
/// use std::path::PathBuf;
///
/// # fn example() -> anyhow::Result<()> {
/// let manager = BackupManager::new(PathBuf::from(".env"));
/// manager.create_backup()?;
/// println!("Backup at {}", manager.backup_path().display());
/// # Ok(())
/// # }
/// ```
pub struct BackupManager {
    /// File that will be overwritten.
    original_path: PathBuf,
    /// Where the copy goes.
    backup_path: PathBuf,
}

impl BackupManager {
    /// Create a manager whose backup name is stamped with the current UTC time.
    pub fn new(original_path: PathBuf) -> Self {
        Self::at(original_path, Utc::now())
    }

    /// Create a manager with an explicit timestamp.
    pub fn at(original_path: PathBuf, timestamp: DateTime<Utc>) -> Self {
        let backup_path = next_free_backup_path(&original_path, timestamp);
        Self {
            original_path,
            backup_path,
        }
    }

    /// Copy the original to the backup location and verify the copy.
    ///
    /// # Errors
    ///
    /// - [`LeagueOpsError::FileNotFound`] if the original does not exist
    /// - [`LeagueOpsError::BackupMismatch`] if the copy's checksum differs
    /// - IO errors from the copy itself
    pub fn create_backup(&self) -> Result<()> {
        if !self.original_path.exists() {
            return Err(LeagueOpsError::FileNotFound {
                path: self.original_path.display().to_string(),
            }
            .into());
        }

        debug!("Creating backup of {} at {}", self.original_path.display(), self.backup_path.display());
        fs::copy(&self.original_path, &self.backup_path).map_err(|e| {
            anyhow::Error::from(LeagueOpsError::FileSystemError {
                operation: "create backup".to_string(),
                path: self.backup_path.display().to_string(),
            })
            .context(e)
        })?;

        self.verify()?;
        info!("Backup written to {}", self.backup_path.display());
        Ok(())
    }

    /// Create the backup only if the original exists; returns the backup path if one was made.
    pub fn create_backup_if_exists(&self) -> Result<Option<&Path>> {
        if !self.original_path.exists() {
            debug!("No existing {} to back up", self.original_path.display());
            return Ok(None);
        }
        self.create_backup()?;
        Ok(Some(&self.backup_path))
    }

    /// Path where the backup is (or will be) stored.
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }

    fn verify(&self) -> Result<()> {
        let expected = calculate_checksum(&self.original_path)?;
        let actual = calculate_checksum(&self.backup_path)
            .context("Failed to read backup back for verification")?;

        if expected != actual {
            return Err(LeagueOpsError::BackupMismatch {
                path: self.original_path.display().to_string(),
                expected,
                actual,
            }
            .into());
        }
        debug!("Backup checksum verified: {expected}");
        Ok(())
    }
}

/// Check that `content` is what the backup holds, before overwriting the original with
/// something derived from it.
pub fn backup_matches(backup_path: &Path, content: &str) -> Result<bool> {
    Ok(calculate_checksum(backup_path)? == checksum_bytes(content.as_bytes()))
}

fn next_free_backup_path(original: &Path, timestamp: DateTime<Utc>) -> PathBuf {
    let name = original.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    let stamp = timestamp.format(BACKUP_TIMESTAMP_FORMAT);

    let mut candidate = original.with_file_name(format!("{name}.backup.{stamp}"));
    let mut counter = 1;
    while candidate.exists() {
        candidate = original.with_file_name(format!("{name}.backup.{stamp}-{counter}"));
        counter += 1;
    }
    candidate
}
