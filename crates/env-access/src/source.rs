// crates/env-access/src/source.rs
// ============================================================================
// Module: Environment Sources
// Description: Injectable key-value sources backing the accessors.
// Purpose: Decouple accessor logic from ambient process state.
// Dependencies: std
// ============================================================================

//! ## Overview
//! An [`EnvSource`] answers a single question: what raw text, if any, is bound
//! to a key. The process-backed source enforces strict UTF-8 and fails closed
//! on undecodable values; the map-backed source gives tests deterministic
//! state without mutating the real environment.
//! Invariants:
//! - Sources never write to the process environment.
//! - A set-but-undecodable value is an error, never a silent absence.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::error::EnvAccessError;

// ============================================================================
// SECTION: Source Trait
// ============================================================================

/// Read-only source of environment variable values.
pub trait EnvSource: Send + Sync {
    /// Returns the raw value bound to `key`, or `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`EnvAccessError::NotUnicode`] when the value is set but cannot
    /// be decoded as UTF-8.
    fn lookup(&self, key: &str) -> Result<Option<String>, EnvAccessError>;
}

// ============================================================================
// SECTION: Process Source
// ============================================================================

/// Source backed by the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl ProcessEnv {
    /// Creates a process-backed source.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EnvSource for ProcessEnv {
    fn lookup(&self, key: &str) -> Result<Option<String>, EnvAccessError> {
        std::env::var_os(key).map_or(Ok(None), |raw| {
            raw.into_string().map(Some).map_err(|_| EnvAccessError::NotUnicode {
                key: key.to_string(),
            })
        })
    }
}

// ============================================================================
// SECTION: Map Source
// ============================================================================

/// Source backed by an in-memory map.
///
/// # Invariants
/// - Lookups never fail; the map holds valid UTF-8 by construction.
/// - Insertion order is irrelevant; keys are matched exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    /// Backing key-value entries.
    entries: BTreeMap<String, String>,
}

impl MapSource {
    /// Creates an empty map source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Binds `key` to `value`, replacing any previous binding.
    pub fn set<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.entries.insert(key.into(), value.into());
    }

    /// Removes the binding for `key`, if any.
    pub fn unset(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl EnvSource for MapSource {
    fn lookup(&self, key: &str) -> Result<Option<String>, EnvAccessError> {
        Ok(self.entries.get(key).cloned())
    }
}
