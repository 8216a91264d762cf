// crates/env-access/src/process.rs
// ============================================================================
// Module: Process Convenience Accessors
// Description: Free functions reading the real process environment.
// Purpose: Cover direct call-sites without constructing a reader.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Thin wrappers over [`EnvReader::from_process`] for call-sites that read one
//! variable and move on. Semantics are identical to the reader methods of the
//! same name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::EnvAccessError;
use crate::reader::EnvReader;

// ============================================================================
// SECTION: Accessors
// ============================================================================

/// Reads `key` from the process environment as text.
///
/// # Errors
///
/// Returns [`EnvAccessError::MissingRequired`] when the variable is absent,
/// or [`EnvAccessError::NotUnicode`] on an undecodable value.
pub fn string(key: &str) -> Result<String, EnvAccessError> {
    EnvReader::from_process().string(key)
}

/// Reads `key` from the process environment as text, or `default` when
/// absent.
///
/// # Errors
///
/// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
pub fn string_or(key: &str, default: &str) -> Result<String, EnvAccessError> {
    EnvReader::from_process().string_or(key, default)
}

/// Reads `key` from the process environment as optional text.
///
/// # Errors
///
/// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
pub fn string_opt(key: &str) -> Result<Option<String>, EnvAccessError> {
    EnvReader::from_process().string_opt(key)
}

/// Reads `key` from the process environment as a base-10 64-bit integer.
///
/// # Errors
///
/// Returns [`EnvAccessError::MissingRequired`] when the variable is absent
/// and [`EnvAccessError::InvalidFormat`] when the value does not parse.
pub fn int64(key: &str) -> Result<i64, EnvAccessError> {
    EnvReader::from_process().int64(key)
}

/// Reads `key` from the process environment as an integer, or `default` when
/// absent.
///
/// # Errors
///
/// Returns [`EnvAccessError::InvalidFormat`] when the value is set but does
/// not parse.
pub fn int64_or(key: &str, default: i64) -> Result<i64, EnvAccessError> {
    EnvReader::from_process().int64_or(key, default)
}

/// Reads `key` from the process environment as a boolean flag.
///
/// Absence yields `false`.
///
/// # Errors
///
/// Returns [`EnvAccessError::InvalidFormat`] when the value is set but is not
/// a recognized boolean literal.
pub fn flag(key: &str) -> Result<bool, EnvAccessError> {
    EnvReader::from_process().flag(key)
}

/// Reads `key` from the process environment as a boolean flag, or `default`
/// when absent.
///
/// # Errors
///
/// Returns [`EnvAccessError::InvalidFormat`] when the value is set but does
/// not parse.
pub fn flag_or(key: &str, default: bool) -> Result<bool, EnvAccessError> {
    EnvReader::from_process().flag_or(key, default)
}

/// Reads `key` from the process environment against a permitted-value set.
///
/// # Errors
///
/// Returns [`EnvAccessError::MissingRequired`] when the variable is absent
/// and [`EnvAccessError::InvalidFormat`] when the value matches no candidate.
pub fn choice<T: AsRef<str> + Clone>(key: &str, allowed: &[T]) -> Result<T, EnvAccessError> {
    EnvReader::from_process().choice(key, allowed)
}

/// Reads `key` from the process environment against a permitted-value set,
/// falling back to `default` when absent or unmatched.
///
/// # Errors
///
/// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
pub fn choice_or<T: AsRef<str> + Clone>(
    key: &str,
    allowed: &[T],
    default: T,
) -> Result<T, EnvAccessError> {
    EnvReader::from_process().choice_or(key, allowed, default)
}

/// Reads `key` from the process environment as a comma-separated list.
///
/// # Errors
///
/// Returns [`EnvAccessError::MissingRequired`] when the variable is absent.
pub fn string_list(key: &str) -> Result<Vec<String>, EnvAccessError> {
    EnvReader::from_process().string_list(key)
}

/// Reads `key` from the process environment as a comma-separated list, or
/// `default` when absent.
///
/// # Errors
///
/// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
pub fn string_list_or(key: &str, default: &[&str]) -> Result<Vec<String>, EnvAccessError> {
    EnvReader::from_process().string_list_or(key, default)
}
