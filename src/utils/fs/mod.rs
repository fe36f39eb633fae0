//! File system utilities
//!
//! - **Atomic writes**: files are written to a sibling temp file and renamed into place
//! - **Typed reads**: a missing input file surfaces as `LeagueOpsError::FileNotFound`
//! - **Checksums**: SHA-256 digests used to verify backups

pub mod atomic;
pub mod formats;
pub mod metadata;

pub use atomic::{atomic_write, safe_write};
pub use formats::{read_text_file, to_pretty_json, write_json_file, write_text_file};
pub use metadata::{calculate_checksum, checksum_bytes};
