//! # roster-store
//!
//! `SQLite` backend for the student roster.
//!
//! - **[`StudentsTable`]**: repository mapping [`roster_core::Student`] to the
//!   `students` table — implements the generic [`roster_core::Table`] contract
//!   plus a birthday lookup
//! - **[`StoreError`]**: `thiserror` hierarchy for everything the backend can
//!   fail with
//!
//! The repository borrows an already-open [`rusqlite::Connection`] supplied by
//! the caller. Connection lifecycle, pooling, and synchronization are the
//! caller's responsibility.

#![deny(unsafe_code)]

pub mod errors;
pub mod students;

pub use errors::{Result, StoreError};
pub use students::StudentsTable;
