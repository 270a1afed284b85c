//! The [`Student`] entity — one row of the `students` table.
//!
//! Students are immutable values: they are constructed from a result row or
//! by the caller before a save/update call, never mutated in place. An update
//! replaces the stored row wholesale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A student record identified by its integer primary key.
///
/// `birthday` is a calendar date, not a timestamp — two students born on the
/// same day compare equal on that field regardless of any time-of-day the
/// source data carried. An unknown birthday is `None`, never a sentinel date.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Primary key. Required and unique; the table enforces uniqueness.
    pub id: i32,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Date of birth, if known.
    pub birthday: Option<NaiveDate>,
}

impl Student {
    /// Construct a student from its four fields.
    #[must_use]
    pub fn new(
        id: i32,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: Option<NaiveDate>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
