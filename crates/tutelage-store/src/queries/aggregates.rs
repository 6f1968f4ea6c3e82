//! Aggregate queries over the roster

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;

/// Number of guide rows
pub fn count_guides(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT count(*) FROM guides", [], |row| row.get(0))
        .map_err(from_rusqlite)
}

/// Highest guide salary
///
/// Returns None on an empty table (`max` over zero rows is SQL NULL)
pub fn max_salary(conn: &Connection) -> Result<Option<i64>> {
    conn.query_row("SELECT max(salary) FROM guides", [], |row| row.get(0))
        .map_err(from_rusqlite)
}
