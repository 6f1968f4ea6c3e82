//! SQLite repository implementation
//!
//! Persists guides and students to SQLite and reads single rows back

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, OptionalExtension, Row, Transaction};
use tutelage_core::model::{Guide, NewGuide, NewStudent, Student};

/// Map a `guides` row (full column list, in schema order) to a Guide
pub fn guide_from_row(row: &Row<'_>) -> rusqlite::Result<Guide> {
    Ok(Guide {
        id: row.get(0)?,
        staff_id: row.get(1)?,
        name: row.get(2)?,
        salary: row.get(3)?,
    })
}

/// Map a `students` row (full column list, in schema order) to a Student
pub fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        enrollment_id: row.get(1)?,
        name: row.get(2)?,
        guide_id: row.get(3)?,
    })
}

/// SQLite repository for guides and students
pub struct SqliteRepo;

impl SqliteRepo {
    /// Insert a guide, returning the assigned row id
    pub fn insert_guide(conn: &Connection, guide: &NewGuide) -> Result<i64> {
        conn.execute(
            "INSERT INTO guides (staff_id, name, salary) VALUES (?1, ?2, ?3)",
            rusqlite::params![guide.staff_id, guide.name, guide.salary],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert a guide within a transaction
    pub fn insert_guide_tx(tx: &Transaction, guide: &NewGuide) -> Result<i64> {
        tx.execute(
            "INSERT INTO guides (staff_id, name, salary) VALUES (?1, ?2, ?3)",
            rusqlite::params![guide.staff_id, guide.name, guide.salary],
        )
        .map_err(from_rusqlite)?;

        Ok(tx.last_insert_rowid())
    }

    /// Insert a student, returning the assigned row id
    ///
    /// `guide_id` may be None: the column is nullable by design
    pub fn insert_student(conn: &Connection, student: &NewStudent) -> Result<i64> {
        conn.execute(
            "INSERT INTO students (enrollment_id, name, guide_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![student.enrollment_id, student.name, student.guide_id],
        )
        .map_err(from_rusqlite)?;

        Ok(conn.last_insert_rowid())
    }

    /// Insert a student within a transaction
    pub fn insert_student_tx(tx: &Transaction, student: &NewStudent) -> Result<i64> {
        tx.execute(
            "INSERT INTO students (enrollment_id, name, guide_id) VALUES (?1, ?2, ?3)",
            rusqlite::params![student.enrollment_id, student.name, student.guide_id],
        )
        .map_err(from_rusqlite)?;

        Ok(tx.last_insert_rowid())
    }

    /// Get a guide by row id
    pub fn get_guide(conn: &Connection, id: i64) -> Result<Option<Guide>> {
        conn.query_row(
            "SELECT id, staff_id, name, salary FROM guides WHERE id = ?1",
            [id],
            guide_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a guide by staff identifier
    pub fn get_guide_by_staff_id(conn: &Connection, staff_id: &str) -> Result<Option<Guide>> {
        conn.query_row(
            "SELECT id, staff_id, name, salary FROM guides WHERE staff_id = ?1",
            [staff_id],
            guide_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a student by row id
    pub fn get_student(conn: &Connection, id: i64) -> Result<Option<Student>> {
        conn.query_row(
            "SELECT id, enrollment_id, name, guide_id FROM students WHERE id = ?1",
            [id],
            student_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// Get a student by enrollment identifier
    pub fn get_student_by_enrollment_id(
        conn: &Connection,
        enrollment_id: &str,
    ) -> Result<Option<Student>> {
        conn.query_row(
            "SELECT id, enrollment_id, name, guide_id FROM students WHERE enrollment_id = ?1",
            [enrollment_id],
            student_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }
}
