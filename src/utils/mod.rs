//! Filesystem helpers shared by the commands.
//!
//! - [`fs`] - atomic writes, typed reads, checksums
//! - [`backup`] - the versioned pre-write backup convention

pub mod backup;
pub mod fs;

pub use backup::{BackupManager, backup_matches};
pub use fs::{atomic_write, read_text_file, safe_write, write_text_file};
