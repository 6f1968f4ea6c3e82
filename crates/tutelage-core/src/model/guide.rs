use serde::{Deserialize, Serialize};

/// Guide - a member of staff mentoring zero or more students
///
/// A Guide is a row mapped from the `guides` table. The one-to-many side of
/// the guide/student relation is materialized on demand by the join queries,
/// not carried on this struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guide {
    /// Database row id
    pub id: i64,

    /// Staff identifier, unique across the roster (e.g. "GD200331")
    pub staff_id: String,

    /// Human-readable name
    pub name: String,

    /// Salary in whole currency units
    pub salary: i64,
}

/// Insert-side counterpart of [`Guide`]
///
/// Carries everything but the row id, which the database assigns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGuide {
    pub staff_id: String,
    pub name: String,
    pub salary: i64,
}

impl NewGuide {
    pub fn new(staff_id: impl Into<String>, name: impl Into<String>, salary: i64) -> Self {
        Self {
            staff_id: staff_id.into(),
            name: name.into(),
            salary,
        }
    }
}

impl std::fmt::Display for Guide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "guide #{} ({}) {}, salary {}",
            self.id, self.staff_id, self.name, self.salary
        )
    }
}
