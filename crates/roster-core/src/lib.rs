//! # roster-core
//!
//! Foundation types and the generic table abstraction for the student roster.
//!
//! This crate provides the shared vocabulary the storage crates depend on:
//!
//! - **[`Student`]**: the immutable entity mapped to one row of the `students` table
//! - **[`Table`]**: the generic CRUD contract a table repository implements,
//!   with associated `Entity`, `Key`, and `Error` types so the trait stays
//!   storage-agnostic

#![deny(unsafe_code)]

pub mod student;
pub mod table;

pub use student::Student;
pub use table::Table;
