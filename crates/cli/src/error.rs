// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::pattern::PatternError;
use crate::rule::RuleError;

/// Skillgate error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments or input
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule failed validation
    #[error("invalid rule: {0}")]
    Rule(#[from] RuleError),

    /// Rule failed to compile
    #[error("invalid rule: {0}")]
    Pattern(#[from] PatternError),

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Config error carrying the file it came from.
    pub fn config(path: &std::path::Path, message: impl std::fmt::Display) -> Self {
        Error::Config {
            message: format!("{}: {}", path.display(), message),
            path: Some(path.to_path_buf()),
        }
    }
}

/// Result type using skillgate Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Prompt matched, or every case passed
    Success = 0,
    /// Prompt did not match, or a case failed
    Failed = 1,
    /// Configuration, rule or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Rule(_) | Error::Pattern(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
