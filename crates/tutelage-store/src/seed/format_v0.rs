//! Seed Format v0 schema
//!
//! Defines the YAML structure for roster seed import

use serde::{Deserialize, Serialize};

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Roster metadata
    pub roster: SeedRoster,

    /// Guides to import, each with its assigned students
    pub guides: Vec<SeedGuide>,

    /// Students to import without a guide assignment
    #[serde(default)]
    pub unassigned: Vec<SeedStudent>,
}

/// Roster metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRoster {
    /// Roster name, recorded in the import ledger
    pub name: String,
}

/// Guide definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedGuide {
    /// Staff identifier (stable across imports)
    pub staff_id: String,

    /// Guide name
    pub name: String,

    /// Salary in whole currency units
    pub salary: i64,

    /// Students assigned to this guide
    #[serde(default)]
    pub students: Vec<SeedStudent>,
}

/// Student definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedStudent {
    /// Enrollment identifier (stable across imports)
    pub enrollment_id: String,

    /// Student name
    pub name: String,
}
