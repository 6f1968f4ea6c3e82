//! Guide projections, filters, and single-row lookups

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::sqlite_repo::guide_from_row;
use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};
use tutelage_core::model::Guide;

/// One row of the two-column salary projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRow {
    pub name: String,
    pub salary: i64,
}

/// All guide rows, ordered by id
pub fn all_guides(conn: &Connection) -> Result<Vec<Guide>> {
    let mut stmt = conn
        .prepare("SELECT id, staff_id, name, salary FROM guides ORDER BY id")
        .map_err(from_rusqlite)?;

    let guides = stmt
        .query_map([], guide_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(guides)
}

/// Single-column projection: every guide name, ordered by id
pub fn guide_names(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM guides ORDER BY id")
        .map_err(from_rusqlite)?;

    let names = stmt
        .query_map([], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(names)
}

/// Guides earning exactly the given salary
pub fn guides_with_salary(conn: &Connection, salary: i64) -> Result<Vec<Guide>> {
    let mut stmt = conn
        .prepare("SELECT id, staff_id, name, salary FROM guides WHERE salary = ?1 ORDER BY id")
        .map_err(from_rusqlite)?;

    let guides = stmt
        .query_map([salary], guide_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(guides)
}

/// Two-column projection into typed rows, ordered by id
pub fn salary_report(conn: &Connection) -> Result<Vec<SalaryRow>> {
    let mut stmt = conn
        .prepare("SELECT name, salary FROM guides ORDER BY id")
        .map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(SalaryRow {
                name: row.get(0)?,
                salary: row.get(1)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Single-row lookup by exact name
///
/// The name is bound as a SQL parameter
pub fn guide_by_name(conn: &Connection, name: &str) -> Result<Option<Guide>> {
    conn.query_row(
        "SELECT id, staff_id, name, salary FROM guides WHERE name = ?1",
        [name],
        guide_from_row,
    )
    .optional()
    .map_err(from_rusqlite)
}

/// Guides whose name starts with the given prefix
///
/// The LIKE pattern is assembled inside SQL from a bound parameter; '%' or
/// '_' in the prefix keep their LIKE wildcard meaning
pub fn guides_named_like(conn: &Connection, prefix: &str) -> Result<Vec<Guide>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, staff_id, name, salary FROM guides WHERE name LIKE ?1 || '%' ORDER BY id",
        )
        .map_err(from_rusqlite)?;

    let guides = stmt
        .query_map([prefix], guide_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(guides)
}

/// All guide rows via `SELECT *` with by-column-name access
///
/// The unprojected counterpart of [`all_guides`]: column order is whatever
/// the schema says, so fields are read by name rather than by index
pub fn scan_guides(conn: &Connection) -> Result<Vec<Guide>> {
    let mut stmt = conn
        .prepare("SELECT * FROM guides ORDER BY id")
        .map_err(from_rusqlite)?;

    let guides = stmt
        .query_map([], |row| {
            Ok(Guide {
                id: row.get("id")?,
                staff_id: row.get("staff_id")?,
                name: row.get("name")?,
                salary: row.get("salary")?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(guides)
}
