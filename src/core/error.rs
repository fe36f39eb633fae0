//! Error handling for leagueops
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** ([`LeagueOpsError`]) for the failure modes code needs to match on
//! 2. **User-friendly messages** ([`ErrorContext`]) with an actionable suggestion for operators
//!
//! Every command returns `anyhow::Result`. Domain failures are raised as [`LeagueOpsError`]
//! and travel through `anyhow` with added context; the binary's single top-level boundary
//! hands the final error to [`user_friendly_error`] and exits with status 1.
//!
//! A missing private-key block is *not* an error: reformatting reports "no change" instead.
//!
//! # Examples
//!
//! ```rust,no_run
//! use leagueops_cli::core::{LeagueOpsError, user_friendly_error};
//!
//! let err = anyhow::Error::from(LeagueOpsError::FileNotFound {
//!     path: ".env".to_string(),
//! });
//! user_friendly_error(err).display();
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for leagueops operations.
///
/// Variants carry the path, table or setting involved so the message is useful on its
/// own; the top-level conversion adds the suggestion shown to the operator.
#[derive(Error, Debug)]
pub enum LeagueOpsError {
    /// An input file the command needs does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was looked up
        path: String,
    },

    /// A filesystem operation failed for a reason other than a missing file
    #[error("File system error: {operation} ({path})")]
    FileSystemError {
        /// What was being attempted, e.g. "create backup"
        operation: String,
        /// Path involved in the operation
        path: String,
    },

    /// Backup copy did not match the original byte-for-byte
    #[error("Backup verification failed for {path}: checksum {expected} != {actual}")]
    BackupMismatch {
        /// Original file
        path: String,
        /// Checksum of the original
        expected: String,
        /// Checksum of the backup copy
        actual: String,
    },

    /// A JSON document could not be parsed or has the wrong shape
    #[error("Invalid JSON in {file}: {reason}")]
    InvalidJson {
        /// File that was being read
        file: String,
        /// Parser message or shape violation
        reason: String,
    },

    /// Required configuration is missing or malformed
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the missing or invalid setting
        message: String,
    },

    /// A command-line value was rejected before doing any work
    #[error("Invalid value for {name}: {reason}")]
    InvalidArgument {
        /// Argument name as the operator typed it
        name: String,
        /// Why it was rejected
        reason: String,
    },

    /// The HTTP request could not be completed
    #[error("Network error: {operation}")]
    NetworkError {
        /// The request that failed
        operation: String,
        /// Underlying transport message
        reason: String,
    },

    /// The hosted database answered with a non-success status
    #[error("Query on table '{table}' failed with HTTP {status}")]
    QueryFailed {
        /// Table the query targeted
        table: String,
        /// HTTP status code
        status: u16,
        /// Response body, usually a PostgREST error document
        body: String,
    },

    /// IO error from [`std::io::Error`]
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON (de)serialization error from [`serde_json::Error`]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Anything else, already formatted
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

impl Clone for LeagueOpsError {
    fn clone(&self) -> Self {
        match self {
            Self::FileNotFound {
                path,
            } => Self::FileNotFound {
                path: path.clone(),
            },
            Self::FileSystemError {
                operation,
                path,
            } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::BackupMismatch {
                path,
                expected,
                actual,
            } => Self::BackupMismatch {
                path: path.clone(),
                expected: expected.clone(),
                actual: actual.clone(),
            },
            Self::InvalidJson {
                file,
                reason,
            } => Self::InvalidJson {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::InvalidArgument {
                name,
                reason,
            } => Self::InvalidArgument {
                name: name.clone(),
                reason: reason.clone(),
            },
            Self::NetworkError {
                operation,
                reason,
            } => Self::NetworkError {
                operation: operation.clone(),
                reason: reason.clone(),
            },
            Self::QueryFailed {
                table,
                status,
                body,
            } => Self::QueryFailed {
                table: table.clone(),
                status: *status,
                body: body.clone(),
            },
            // io::Error and serde_json::Error are not Clone; keep kind and message
            Self::IoError(e) => Self::IoError(std::io::Error::new(e.kind(), e.to_string())),
            Self::JsonError(e) => Self::Other {
                message: format!("JSON error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error wrapper carrying the operator-facing details and suggestion.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: LeagueOpsError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a context with no suggestion or details.
    #[must_use]
    pub const fn new(error: LeagueOpsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr: message in red, details in yellow, suggestion in green.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] for display.
///
/// Known [`LeagueOpsError`] variants anywhere in the chain get a tailored suggestion.
/// IO and JSON errors are mapped onto the matching variant. Everything else keeps its
/// full `anyhow` context chain as the message.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    let chain_details = context_chain(&error);

    for cause in error.chain() {
        if let Some(known) = cause.downcast_ref::<LeagueOpsError>() {
            let ctx = create_error_context(known.clone());
            return match chain_details {
                Some(details) if ctx.details.is_none() => ctx.with_details(details),
                _ => ctx,
            };
        }
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(LeagueOpsError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check file ownership and permissions on the target file")
                .with_details(io_error.to_string());
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(LeagueOpsError::FileNotFound {
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file exists and the path is correct")
                .with_details(io_error.to_string());
            }
            _ => {}
        }
    }

    if let Some(json_error) = error.downcast_ref::<serde_json::Error>() {
        return ErrorContext::new(LeagueOpsError::InvalidJson {
            file: "input".to_string(),
            reason: json_error.to_string(),
        })
        .with_suggestion("Fix the JSON syntax (trailing commas and comments are not allowed)");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    if let Some(details) = chain_details {
        message.push_str("\n\nCaused by:\n");
        message.push_str(&details);
    }

    ErrorContext::new(LeagueOpsError::Other {
        message,
    })
}

/// Render the causes below the top-level message, one per line.
fn context_chain(error: &anyhow::Error) -> Option<String> {
    let chain: Vec<String> = error.chain().skip(1).map(ToString::to_string).collect();
    if chain.is_empty() {
        return None;
    }

    Some(
        chain
            .iter()
            .enumerate()
            .map(|(i, cause)| format!("  {}: {}", i + 1, cause))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Attach a suggestion to each known error variant.
fn create_error_context(error: LeagueOpsError) -> ErrorContext {
    let (suggestion, details) = advice_for(&error);
    let mut ctx = ErrorContext::new(error);
    ctx.suggestion = suggestion;
    ctx.details = details;
    ctx
}

fn advice_for(error: &LeagueOpsError) -> (Option<String>, Option<String>) {
    match error {
        LeagueOpsError::FileNotFound {
            path,
        } => {
            let suggestion = if path.ends_with(".json") {
                "Create the file or pass its location with --file".to_string()
            } else {
                format!("Check the path '{path}' or pass the right file with --file")
            };
            (Some(suggestion), None)
        }
        LeagueOpsError::FileSystemError {
            ..
        } => (Some("Check that the directory is writable and has free space".to_string()), None),
        LeagueOpsError::BackupMismatch {
            ..
        } => (
            Some("The original file was left untouched; copy it manually before retrying".to_string()),
            Some("The file may have been modified while the backup was being taken".to_string()),
        ),
        LeagueOpsError::InvalidJson {
            ..
        } => (
            Some("Fix the JSON by hand; the file is never rewritten when it cannot be parsed".to_string()),
            None,
        ),
        LeagueOpsError::ConfigError {
            ..
        } => (
            Some(
                "Export the variable or add it to .env.local (or the file named by LEAGUEOPS_ENV_FILE)"
                    .to_string(),
            ),
            None,
        ),
        LeagueOpsError::InvalidArgument {
            ..
        } => (Some("Run with --help to see accepted values".to_string()), None),
        LeagueOpsError::NetworkError {
            reason,
            ..
        } => (
            Some("Check NEXT_PUBLIC_SUPABASE_URL and that the project is reachable".to_string()),
            Some(reason.clone()),
        ),
        LeagueOpsError::QueryFailed {
            status,
            body,
            ..
        } => {
            let suggestion = match status {
                401 | 403 => "Check SUPABASE_SERVICE_ROLE_KEY; the key was rejected",
                404 => "Check the table name with --table",
                _ => "Inspect the response body for the PostgREST error code",
            };
            (Some(suggestion.to_string()), Some(body.clone()))
        }
        LeagueOpsError::IoError(_)
        | LeagueOpsError::JsonError(_)
        | LeagueOpsError::Other {
            ..
        } => (None, None),
    }
}
