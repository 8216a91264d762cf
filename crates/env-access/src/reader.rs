// crates/env-access/src/reader.rs
// ============================================================================
// Module: Environment Reader
// Description: Typed accessors over an injectable environment source.
// Purpose: Centralize env parsing with explicit defaults and typed errors.
// Dependencies: std
// ============================================================================

//! ## Overview
//! The reader exposes one accessor family per target type. Required accessors
//! fail with [`EnvAccessError::MissingRequired`] when a variable is absent;
//! `_or` variants substitute an explicit default instead. A variable that is
//! unset, or set to the empty string, counts as absent; whitespace-only
//! values are present and returned verbatim by the text accessors.
//! Invariants:
//! - Accessors never mutate the environment; repeated calls against unchanged
//!   state return equal results.
//! - Defaults apply only to absent variables; a present but unparseable
//!   integer or boolean is an error even when a default is supplied.
//! - The enumeration accessor falls through to its default on a
//!   present-but-unmatched value.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::error::EnvAccessError;
use crate::source::EnvSource;
use crate::source::ProcessEnv;

// ============================================================================
// SECTION: Reader
// ============================================================================

/// Typed environment accessor over a source `S`.
#[derive(Debug, Clone, Default)]
pub struct EnvReader<S: EnvSource> {
    /// Source consulted for raw values.
    source: S,
}

impl EnvReader<ProcessEnv> {
    /// Creates a reader over the real process environment.
    #[must_use]
    pub const fn from_process() -> Self {
        Self {
            source: ProcessEnv::new(),
        }
    }
}

impl<S: EnvSource> EnvReader<S> {
    /// Creates a reader over the given source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self {
            source,
        }
    }

    /// Returns the raw value for `key`, treating the empty string as absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::NotUnicode`] when the source cannot decode
    /// the value.
    fn raw(&self, key: &str) -> Result<Option<String>, EnvAccessError> {
        match self.source.lookup(key)? {
            Some(value) if value.is_empty() => Ok(None),
            other => Ok(other),
        }
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Returns the value of `key` as text.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::MissingRequired`] when the variable is
    /// absent, or [`EnvAccessError::NotUnicode`] on an undecodable value.
    pub fn string(&self, key: &str) -> Result<String, EnvAccessError> {
        self.raw(key)?.ok_or_else(|| EnvAccessError::missing(key))
    }

    /// Returns the value of `key` as text, or `default` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
    pub fn string_or(&self, key: &str, default: &str) -> Result<String, EnvAccessError> {
        Ok(self.raw(key)?.unwrap_or_else(|| default.to_string()))
    }

    /// Returns the value of `key` as text, or `None` when absent.
    ///
    /// Absence is not a failure for this accessor.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
    pub fn string_opt(&self, key: &str) -> Result<Option<String>, EnvAccessError> {
        self.raw(key)
    }

    // ------------------------------------------------------------------
    // Integer
    // ------------------------------------------------------------------

    /// Returns the value of `key` parsed as a base-10 signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::MissingRequired`] when the variable is
    /// absent and [`EnvAccessError::InvalidFormat`] when the value does not
    /// parse as an integer.
    pub fn int64(&self, key: &str) -> Result<i64, EnvAccessError> {
        let value = self.string(key)?;
        parse_int64(key, &value)
    }

    /// Returns the value of `key` parsed as an integer, or `default` when
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::InvalidFormat`] when the variable is set but
    /// does not parse; the default does not rescue a malformed value.
    pub fn int64_or(&self, key: &str, default: i64) -> Result<i64, EnvAccessError> {
        match self.raw(key)? {
            Some(value) => parse_int64(key, &value),
            None => Ok(default),
        }
    }

    // ------------------------------------------------------------------
    // Boolean
    // ------------------------------------------------------------------

    /// Returns the value of `key` parsed as a boolean.
    ///
    /// Absence yields `false` rather than an error; boolean variables act as
    /// feature flags that default to off.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::InvalidFormat`] when the value is set but is
    /// not a recognized boolean literal.
    pub fn flag(&self, key: &str) -> Result<bool, EnvAccessError> {
        self.flag_or(key, false)
    }

    /// Returns the value of `key` parsed as a boolean, or `default` when
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::InvalidFormat`] when the variable is set but
    /// does not parse; the default does not rescue a malformed value.
    pub fn flag_or(&self, key: &str, default: bool) -> Result<bool, EnvAccessError> {
        match self.raw(key)? {
            Some(value) => parse_flag(key, &value),
            None => Ok(default),
        }
    }

    // ------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------

    /// Returns the permitted value whose text equals the value of `key`.
    ///
    /// Candidates are compared in slice order; the first textual match wins.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::MissingRequired`] when the variable is
    /// absent and [`EnvAccessError::InvalidFormat`] when the value matches no
    /// candidate.
    pub fn choice<T>(&self, key: &str, allowed: &[T]) -> Result<T, EnvAccessError>
    where
        T: AsRef<str> + Clone,
    {
        let value = self.string(key)?;
        match_choice(&value, allowed)
            .ok_or_else(|| EnvAccessError::invalid(key, &unmatched_reason(&value, allowed)))
    }

    /// Returns the permitted value matching `key`, or `default` when the
    /// variable is absent or matches no candidate.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
    pub fn choice_or<T>(&self, key: &str, allowed: &[T], default: T) -> Result<T, EnvAccessError>
    where
        T: AsRef<str> + Clone,
    {
        match self.raw(key)? {
            Some(value) => Ok(match_choice(&value, allowed).unwrap_or(default)),
            None => Ok(default),
        }
    }

    // ------------------------------------------------------------------
    // Text list
    // ------------------------------------------------------------------

    /// Returns the value of `key` as a comma-separated list.
    ///
    /// Elements are trimmed of ASCII whitespace; elements that trim to
    /// nothing are dropped, so a value of only commas yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::MissingRequired`] when the variable is
    /// absent.
    pub fn string_list(&self, key: &str) -> Result<Vec<String>, EnvAccessError> {
        let value = self.string(key)?;
        Ok(split_list(&value))
    }

    /// Returns the value of `key` as a comma-separated list, or `default`
    /// when absent.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::NotUnicode`] on an undecodable value.
    pub fn string_list_or(
        &self,
        key: &str,
        default: &[&str],
    ) -> Result<Vec<String>, EnvAccessError> {
        match self.raw(key)? {
            Some(value) => Ok(split_list(&value)),
            None => Ok(default.iter().map(|item| (*item).to_string()).collect()),
        }
    }
}

// ============================================================================
// SECTION: Parsing Helpers
// ============================================================================

/// Parses a base-10 signed 64-bit integer.
///
/// Surrounding whitespace is not stripped; a padded value is malformed.
fn parse_int64(key: &str, value: &str) -> Result<i64, EnvAccessError> {
    value
        .parse::<i64>()
        .map_err(|_| EnvAccessError::invalid(key, "expected a base-10 64-bit integer"))
}

/// Parses a boolean with the permissive flag grammar.
///
/// Accepted literals: `1`, `0`, `t`, `f`, `T`, `F`, and `true` / `false`
/// in lower, upper, or title case. Nothing else, and no surrounding
/// whitespace.
fn parse_flag(key: &str, value: &str) -> Result<bool, EnvAccessError> {
    match value {
        "1" | "t" | "T" | "true" | "True" | "TRUE" => Ok(true),
        "0" | "f" | "F" | "false" | "False" | "FALSE" => Ok(false),
        _ => Err(EnvAccessError::invalid(key, "expected 1, 0, t, f, true, or false")),
    }
}

/// Returns the first candidate whose text equals `value`.
fn match_choice<T: AsRef<str> + Clone>(value: &str, allowed: &[T]) -> Option<T> {
    allowed.iter().find(|candidate| candidate.as_ref() == value).cloned()
}

/// Formats the reason string for an unmatched enumeration value.
fn unmatched_reason<T: AsRef<str>>(value: &str, allowed: &[T]) -> String {
    let permitted = allowed.iter().map(AsRef::as_ref).collect::<Vec<&str>>().join(", ");
    format!("value '{value}' is not one of [{permitted}]")
}

/// Splits a raw value on commas, trimming and dropping empty elements.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|element| !element.is_empty())
        .map(str::to_string)
        .collect()
}
