//! Students repository — CRUD for the `students` table.
//!
//! The repository borrows the connection it was constructed with and issues
//! one parameterized statement per operation. Statement handles are scoped to
//! the call and released on every exit path. Column order and names
//! (`id`, `firstName`, `lastName`, `birthday`) are part of the contract.

use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;

use roster_core::{Student, Table};

use crate::errors::{Result, StoreError};

/// Name of the backing table.
pub const TABLE_NAME: &str = "students";

/// Repository mapping [`Student`] to the `students` table.
///
/// Holds the externally supplied, already-open connection as a borrowed
/// capability. Every method is a single synchronous request/response; no
/// session or transaction state is kept across calls.
pub struct StudentsTable<'conn> {
    conn: &'conn Connection,
}

impl<'conn> StudentsTable<'conn> {
    /// Wrap an open connection. The table itself is created separately via
    /// [`Table::create_table`].
    #[must_use]
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Return all students whose birthday equals `date`.
    ///
    /// Comparison is by calendar value. Rows with a NULL birthday never
    /// match.
    pub fn find_by_birthday(&self, date: NaiveDate) -> Result<Vec<Student>> {
        let mut stmt = self
            .conn
            .prepare("SELECT * FROM students WHERE birthday = ?1")?;
        let students = stmt
            .query_map(params![date], student_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(students)
    }
}

impl Table for StudentsTable<'_> {
    type Entity = Student;
    type Key = i32;
    type Error = StoreError;

    fn table_name(&self) -> &str {
        TABLE_NAME
    }

    fn create_table(&self) -> Result<()> {
        debug!(table = TABLE_NAME, "creating table");
        self.conn.execute_batch(
            "CREATE TABLE students (
               id        INT NOT NULL PRIMARY KEY,
               firstName CHAR(40),
               lastName  CHAR(40),
               birthday  DATE
             )",
        )?;
        Ok(())
    }

    fn drop_table(&self) -> Result<()> {
        debug!(table = TABLE_NAME, "dropping table");
        self.conn.execute_batch("DROP TABLE students")?;
        Ok(())
    }

    fn find_by_primary_key(&self, key: i32) -> Result<Option<Student>> {
        let student = self
            .conn
            .query_row(
                "SELECT * FROM students WHERE id = ?1",
                params![key],
                student_from_row,
            )
            .optional()?;
        Ok(student)
    }

    fn find_all(&self) -> Result<Vec<Student>> {
        let mut stmt = self.conn.prepare("SELECT * FROM students")?;
        let students = stmt
            .query_map([], student_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(students)
    }

    fn save(&self, student: &Student) -> Result<()> {
        let _ = self
            .conn
            .execute(
                "INSERT INTO students VALUES (?1, ?2, ?3, ?4)",
                params![
                    student.id,
                    student.first_name,
                    student.last_name,
                    student.birthday
                ],
            )
            .map_err(|e| {
                if is_constraint_violation(&e) {
                    StoreError::DuplicateId(student.id)
                } else {
                    StoreError::Sqlite(e)
                }
            })?;
        Ok(())
    }

    fn update(&self, student: &Student) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE students SET id = ?1, firstName = ?2, lastName = ?3, birthday = ?4
             WHERE id = ?5",
            params![
                student.id,
                student.first_name,
                student.last_name,
                student.birthday,
                student.id
            ],
        )?;
        Ok(changed == 1)
    }

    fn delete(&self, key: i32) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", params![key])?;
        Ok(changed == 1)
    }
}

/// Map one result row to a [`Student`], reading columns by name.
///
/// Shared by every read path so single-row and multi-row queries marshal
/// rows identically. A NULL `birthday` maps to `None`.
fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get("id")?,
        first_name: row.get("firstName")?,
        last_name: row.get("lastName")?,
        birthday: row.get("birthday")?,
    })
}

/// True if the error is a SQLite constraint violation (duplicate primary key).
fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
