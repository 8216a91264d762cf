// crates/env-access/src/lib.rs
// ============================================================================
// Module: Env Access
// Description: Typed accessors for process environment variables.
// Purpose: Read required and optional configuration with typed errors.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! This crate reads typed values (text, text lists, 64-bit integers,
//! booleans, string enumerations) from environment variables. Lookups go
//! through an injectable [`EnvSource`], so tests substitute an in-memory map
//! instead of mutating real process state. Failures are values
//! ([`EnvAccessError`]), never aborts.
//! Invariants:
//! - The environment is read-only from this crate's perspective.
//! - Accessors are stateless and idempotent against unchanged state.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod error;
pub mod process;
mod reader;
mod source;

// ============================================================================
// SECTION: Tests
// ============================================================================


#[cfg(test)]
mod source_tests;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::EnvAccessError;
pub use reader::EnvReader;
pub use source::EnvSource;
pub use source::MapSource;
pub use source::ProcessEnv;
