//! File checksums used to verify backups.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

/// Calculates the SHA-256 checksum of a file as lowercase hex.
///
/// # Examples
///
/// ```rust,no_run
/// use leagueops_cli::utils::fs::calculate_checksum;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// let checksum = calculate_checksum(Path::new(".env"))?;
/// println!("sha256 {checksum}");
/// # Ok(())
/// # }
/// ```
pub fn calculate_checksum(path: &Path) -> Result<String> {
    let content = fs::read(path)
        .with_context(|| format!("Failed to read file for checksum: {}", path.display()))?;

    Ok(checksum_bytes(&content))
}

/// SHA-256 of an in-memory buffer as lowercase hex.
#[must_use]
pub fn checksum_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
