// crates/env-access/src/source_tests.rs
// ============================================================================
// Module: Source Unit Tests
// Description: Unit coverage for process and map sources.
// Purpose: Ensure process-backed lookups agree with map-backed semantics.
// Dependencies: env-access
// ============================================================================

//! ## Overview
//! Process-backed tests mutate real environment state, so they serialize
//! behind a global lock and restore prior values via a drop guard.
//! Invariants:
//! - Set-but-undecodable process values fail closed with `NotUnicode`.
//! - Tests restore environment state after each run.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions favor direct unwrap/expect for clarity."
)]

use std::ffi::OsStr;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::OnceLock;

use crate::EnvAccessError;
use crate::EnvSource;
use crate::MapSource;
use crate::ProcessEnv;
use crate::process;

mod env_mut {
    #![allow(unsafe_code, reason = "Tests mutate process env vars in a controlled scope.")]

    use std::ffi::OsStr;

    /// Sets an environment variable for the current process.
    pub fn set_var(key: &str, value: &OsStr) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::set_var(key, value);
        }
    }

    /// Removes an environment variable from the current process.
    pub fn remove_var(key: &str) {
        // SAFETY: Tests serialize environment mutation via a global lock.
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn env_lock() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(())).lock().expect("env lock poisoned")
}

/// Restores prior bindings for the guarded keys on drop.
struct EnvGuard {
    entries: Vec<(String, Option<std::ffi::OsString>)>,
}

impl EnvGuard {
    fn new(names: &[&str]) -> Self {
        let entries = names
            .iter()
            .map(|name| ((*name).to_string(), std::env::var_os(name)))
            .collect();
        Self {
            entries,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for (name, value) in self.entries.drain(..) {
            match value {
                Some(value) => env_mut::set_var(&name, &value),
                None => env_mut::remove_var(&name),
            }
        }
    }
}

// ============================================================================
// SECTION: Process Source
// ============================================================================

#[test]
fn process_lookup_returns_set_value() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&["ENV_ACCESS_TEST_SET"]);

    env_mut::set_var("ENV_ACCESS_TEST_SET", OsStr::new("value"));
    let found = ProcessEnv::new().lookup("ENV_ACCESS_TEST_SET").unwrap();
    assert_eq!(found, Some("value".to_string()));
}

#[test]
fn process_lookup_returns_none_when_unset() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&["ENV_ACCESS_TEST_UNSET"]);

    env_mut::remove_var("ENV_ACCESS_TEST_UNSET");
    let found = ProcessEnv::new().lookup("ENV_ACCESS_TEST_UNSET").unwrap();
    assert_eq!(found, None);
}

#[test]
fn process_lookup_preserves_empty_values() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&["ENV_ACCESS_TEST_EMPTY"]);

    env_mut::set_var("ENV_ACCESS_TEST_EMPTY", OsStr::new(""));
    let found = ProcessEnv::new().lookup("ENV_ACCESS_TEST_EMPTY").unwrap();
    assert_eq!(found, Some(String::new()));
}

#[cfg(unix)]
#[test]
fn process_lookup_fails_closed_on_invalid_utf8() {
    use std::os::unix::ffi::OsStrExt;

    let _lock = env_lock();
    let _guard = EnvGuard::new(&["ENV_ACCESS_TEST_RAW"]);

    env_mut::set_var("ENV_ACCESS_TEST_RAW", OsStr::from_bytes(&[0x66, 0x6f, 0xff]));
    let err = ProcessEnv::new().lookup("ENV_ACCESS_TEST_RAW").unwrap_err();
    assert_eq!(
        err,
        EnvAccessError::NotUnicode {
            key: "ENV_ACCESS_TEST_RAW".to_string(),
        }
    );
}

// ============================================================================
// SECTION: Map Source
// ============================================================================

#[test]
fn map_source_set_and_unset_round_trip() {
    let mut source = MapSource::new();
    source.set("HOST", "localhost");
    assert_eq!(source.lookup("HOST").unwrap(), Some("localhost".to_string()));

    source.unset("HOST");
    assert_eq!(source.lookup("HOST").unwrap(), None);
}

#[test]
fn map_source_collects_from_pairs() {
    let source: MapSource = [("A", "1"), ("B", "2")].into_iter().collect();
    assert_eq!(source.lookup("A").unwrap(), Some("1".to_string()));
    assert_eq!(source.lookup("B").unwrap(), Some("2".to_string()));
    assert_eq!(source.lookup("C").unwrap(), None);
}

// ============================================================================
// SECTION: Process Convenience Accessors
// ============================================================================

#[test]
fn process_accessors_agree_with_reader_semantics() {
    let _lock = env_lock();
    let _guard =
        EnvGuard::new(&["ENV_ACCESS_TEST_HOST", "ENV_ACCESS_TEST_PORT", "ENV_ACCESS_TEST_DEBUG"]);

    env_mut::set_var("ENV_ACCESS_TEST_HOST", OsStr::new("localhost"));
    env_mut::set_var("ENV_ACCESS_TEST_PORT", OsStr::new("8080"));
    env_mut::remove_var("ENV_ACCESS_TEST_DEBUG");

    assert_eq!(process::string("ENV_ACCESS_TEST_HOST").unwrap(), "localhost");
    assert_eq!(process::int64("ENV_ACCESS_TEST_PORT").unwrap(), 8080);
    assert!(!process::flag("ENV_ACCESS_TEST_DEBUG").unwrap());
    assert!(process::flag_or("ENV_ACCESS_TEST_DEBUG", true).unwrap());
    assert_eq!(process::string_opt("ENV_ACCESS_TEST_DEBUG").unwrap(), None);
}

#[test]
fn process_choice_and_list_accessors() {
    let _lock = env_lock();
    let _guard = EnvGuard::new(&["ENV_ACCESS_TEST_MODE", "ENV_ACCESS_TEST_LABELS"]);

    env_mut::set_var("ENV_ACCESS_TEST_MODE", OsStr::new("replica"));
    env_mut::set_var("ENV_ACCESS_TEST_LABELS", OsStr::new("dev, prod"));

    let mode = process::choice("ENV_ACCESS_TEST_MODE", &["primary", "replica"]).unwrap();
    assert_eq!(mode, "replica");
    let labels = process::string_list("ENV_ACCESS_TEST_LABELS").unwrap();
    assert_eq!(labels, vec!["dev", "prod"]);
}
