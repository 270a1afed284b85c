//! Error types for the roster storage backend.
//!
//! [`StoreError`] is the single error type returned by every repository
//! operation. Driver-level failures are wrapped rather than swallowed, so the
//! caller can always tell "query failed" apart from "legitimately no result"
//! (`Ok(None)`, `Ok(false)`, or an empty collection).

use thiserror::Error;

/// Errors that can occur during roster storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// `SQLite` driver error — connectivity failures, missing table on a
    /// drop or a second create, malformed rows.
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Primary-key constraint violation: a save with an id that already
    /// exists. The original row is left unmodified.
    #[error("duplicate student id: {0}")]
    DuplicateId(i32),
}

/// Convenience type alias for roster storage results.
pub type Result<T> = std::result::Result<T, StoreError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
