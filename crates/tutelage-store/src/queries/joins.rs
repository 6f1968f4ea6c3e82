//! Join queries across the guide/student relation
//!
//! Four shapes, distinguished by how they treat the nullable foreign key:
//! inner (unassigned students excluded), left outer (included with a None
//! guide), right outer (guide side drives the rows), and an eager-collection
//! join that materializes each guide with its full student list in one query.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use tutelage_core::model::{Guide, Student};

/// A student paired with its assigned guide (inner join row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentWithGuide {
    pub student: Student,
    pub guide: Guide,
}

/// A student paired with its guide if assigned (left outer join row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRosterRow {
    pub student: Student,
    pub guide: Option<Guide>,
}

/// A guide paired with one of its students if any (right outer join row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideRosterRow {
    pub student: Option<Student>,
    pub guide: Guide,
}

/// A guide with its student collection eagerly materialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuideWithStudents {
    pub guide: Guide,
    pub students: Vec<Student>,
}

const STUDENT_COLS: &str = "s.id, s.enrollment_id, s.name, s.guide_id";
const GUIDE_COLS: &str = "g.id, g.staff_id, g.name, g.salary";

fn student_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(offset)?,
        enrollment_id: row.get(offset + 1)?,
        name: row.get(offset + 2)?,
        guide_id: row.get(offset + 3)?,
    })
}

fn guide_at(row: &Row<'_>, offset: usize) -> rusqlite::Result<Guide> {
    Ok(Guide {
        id: row.get(offset)?,
        staff_id: row.get(offset + 1)?,
        name: row.get(offset + 2)?,
        salary: row.get(offset + 3)?,
    })
}

/// Inner join: students with a guide assigned, paired with that guide
///
/// A student whose `guide_id` is NULL does not appear
pub fn students_with_guides(conn: &Connection) -> Result<Vec<StudentWithGuide>> {
    let sql = format!(
        "SELECT {STUDENT_COLS}, {GUIDE_COLS}
         FROM students s
         INNER JOIN guides g ON s.guide_id = g.id
         ORDER BY s.id"
    );
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(StudentWithGuide {
                student: student_at(row, 0)?,
                guide: guide_at(row, 4)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Left outer join: every student, with its guide when assigned
///
/// A student whose `guide_id` is NULL appears with `guide == None`
pub fn students_with_optional_guides(conn: &Connection) -> Result<Vec<StudentRosterRow>> {
    let sql = format!(
        "SELECT {STUDENT_COLS}, {GUIDE_COLS}
         FROM students s
         LEFT OUTER JOIN guides g ON s.guide_id = g.id
         ORDER BY s.id"
    );
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            // Guide columns are all NULL when the join found no row; probe
            // the primary key to decide
            let guide = match row.get::<_, Option<i64>>(4)? {
                Some(_) => Some(guide_at(row, 4)?),
                None => None,
            };
            Ok(StudentRosterRow {
                student: student_at(row, 0)?,
                guide,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Right outer join: every guide, with a student row when one points at it
///
/// The guide side drives the result: an unassigned student does not appear,
/// while a guide without students yields a row with `student == None`
pub fn guided_students(conn: &Connection) -> Result<Vec<GuideRosterRow>> {
    let sql = format!(
        "SELECT {STUDENT_COLS}, {GUIDE_COLS}
         FROM students s
         RIGHT OUTER JOIN guides g ON s.guide_id = g.id
         ORDER BY g.id, s.id"
    );
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let rows = stmt
        .query_map([], |row| {
            let student = match row.get::<_, Option<i64>>(0)? {
                Some(_) => Some(student_at(row, 0)?),
                None => None,
            };
            Ok(GuideRosterRow {
                student,
                guide: guide_at(row, 4)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(rows)
}

/// Eager-collection join: each guide with its full student list, one query
///
/// Inner join semantics on the guide side: a guide with no students does not
/// appear. Rows arrive ordered by guide then student id and are grouped in a
/// single pass.
pub fn guides_with_students(conn: &Connection) -> Result<Vec<GuideWithStudents>> {
    let sql = format!(
        "SELECT {GUIDE_COLS}, {STUDENT_COLS}
         FROM guides g
         INNER JOIN students s ON s.guide_id = g.id
         ORDER BY g.id, s.id"
    );
    let mut stmt = conn.prepare(&sql).map_err(from_rusqlite)?;

    let flat = stmt
        .query_map([], |row| {
            Ok((guide_at(row, 0)?, student_at(row, 4)?))
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    let mut grouped: Vec<GuideWithStudents> = Vec::new();
    for (guide, student) in flat {
        match grouped.last_mut() {
            Some(entry) if entry.guide.id == guide.id => entry.students.push(student),
            _ => grouped.push(GuideWithStudents {
                guide,
                students: vec![student],
            }),
        }
    }

    Ok(grouped)
}
