//! Named queries
//!
//! Statements predefined in SQL assets embedded at compile time with
//! include_str!, and invoked through the registry by name. Parameters are
//! bound by their `:name` placeholders.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, unknown_named_query, Result};
use crate::repo::sqlite_repo::{guide_from_row, student_from_row};
use rusqlite::{named_params, Connection};
use tutelage_core::model::{Guide, Student};

/// A named query: registry name plus the embedded statement
#[derive(Debug)]
pub struct NamedQuery {
    pub name: &'static str,
    pub sql: &'static str,
}

const REGISTRY: &[NamedQuery] = &[
    NamedQuery {
        name: "find_guides_by_name",
        sql: include_str!("../../sql/find_guides_by_name.sql"),
    },
    NamedQuery {
        name: "find_students_by_guide",
        sql: include_str!("../../sql/find_students_by_guide.sql"),
    },
];

/// Look up a registered query by name
pub fn get(name: &str) -> Result<&'static NamedQuery> {
    REGISTRY
        .iter()
        .find(|q| q.name == name)
        .ok_or_else(|| unknown_named_query(name))
}

/// Names of all registered queries, in registration order
pub fn names() -> Vec<&'static str> {
    REGISTRY.iter().map(|q| q.name).collect()
}

/// Run the `find_guides_by_name` named query
pub fn find_guides_by_name(conn: &Connection, name: &str) -> Result<Vec<Guide>> {
    let query = get("find_guides_by_name")?;
    let mut stmt = conn.prepare(query.sql).map_err(from_rusqlite)?;

    let guides = stmt
        .query_map(named_params! { ":name": name }, guide_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(guides)
}

/// Run the `find_students_by_guide` named query
pub fn find_students_by_guide(conn: &Connection, staff_id: &str) -> Result<Vec<Student>> {
    let query = get("find_students_by_guide")?;
    let mut stmt = conn.prepare(query.sql).map_err(from_rusqlite)?;

    let students = stmt
        .query_map(named_params! { ":staff_id": staff_id }, student_from_row)
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;

    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_lookup() {
        assert!(get("find_guides_by_name").is_ok());
        assert!(get("find_students_by_guide").is_ok());
    }

    #[test]
    fn test_unknown_name_errors() {
        let err = get("find_by_shoe_size").unwrap_err();
        assert_eq!(err.code(), "ERR_NOT_FOUND");
        assert_eq!(err.entity(), Some("find_by_shoe_size"));
    }

    #[test]
    fn test_names_in_registration_order() {
        assert_eq!(
            names(),
            vec!["find_guides_by_name", "find_students_by_guide"]
        );
    }
}
