// crates/env-access/src/error.rs
// ============================================================================
// Module: Env Access Errors
// Description: Typed errors for environment variable accessors.
// Purpose: Surface missing/invalid configuration as recoverable values.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Accessors report failures as values instead of aborting the process, so
//! callers can choose between propagation and log-and-exit at startup.
//! Invariants:
//! - Every error names the environment variable it concerns.
//! - Errors are comparable so tests can assert on exact failure kinds.

// ============================================================================
// SECTION: Error Types
// ============================================================================

use thiserror::Error;

/// Error produced by environment accessors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnvAccessError {
    /// Variable is unset (or empty) and the accessor requires a value.
    #[error("missing required environment variable: {key}")]
    MissingRequired {
        /// Name of the variable that was absent.
        key: String,
    },
    /// Variable is set but its value fails type-specific parsing.
    #[error("invalid value for environment variable {key}: {reason}")]
    InvalidFormat {
        /// Name of the variable that failed to parse.
        key: String,
        /// Short description of the expected format.
        reason: String,
    },
    /// Variable is set but its value is not valid UTF-8.
    #[error("environment variable {key} is not valid UTF-8")]
    NotUnicode {
        /// Name of the variable with the undecodable value.
        key: String,
    },
}

impl EnvAccessError {
    /// Returns the name of the environment variable this error concerns.
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::MissingRequired {
                key,
            }
            | Self::InvalidFormat {
                key, ..
            }
            | Self::NotUnicode {
                key,
            } => key,
        }
    }

    /// Builds a [`EnvAccessError::MissingRequired`] for the given key.
    pub(crate) fn missing(key: &str) -> Self {
        Self::MissingRequired {
            key: key.to_string(),
        }
    }

    /// Builds a [`EnvAccessError::InvalidFormat`] for the given key.
    pub(crate) fn invalid(key: &str, reason: &str) -> Self {
        Self::InvalidFormat {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
