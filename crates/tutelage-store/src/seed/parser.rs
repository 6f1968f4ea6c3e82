//! Seed parser with validation
//!
//! Parses YAML and validates schema version and identifier uniqueness

#![allow(clippy::result_large_err)]

use crate::errors::{seed_validation, Result};
use crate::seed::format_v0::SeedV0;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Parse a seed file from a path
pub fn parse_seed_file(path: &Path) -> Result<SeedV0> {
    let content = fs::read_to_string(path)
        .map_err(|e| seed_validation(&format!("Failed to read seed file: {}", e)))?;

    parse_seed_str(&content)
}

/// Parse a seed from a string
pub fn parse_seed_str(content: &str) -> Result<SeedV0> {
    // Parse YAML
    let seed: SeedV0 = serde_yaml::from_str(content)
        .map_err(|e| seed_validation(&format!("YAML parse error: {}", e)))?;

    // Validate seed
    validate_seed(&seed)?;

    Ok(seed)
}

/// Validate a parsed seed
fn validate_seed(seed: &SeedV0) -> Result<()> {
    // Validate schema version
    if seed.schema_version != 0 {
        return Err(seed_validation(&format!(
            "Unsupported schema_version: {}. Expected 0",
            seed.schema_version
        )));
    }

    if seed.roster.name.trim().is_empty() {
        return Err(seed_validation("Roster name must not be empty"));
    }

    // Validate staff id uniqueness
    let mut staff_ids = HashSet::new();
    for guide in &seed.guides {
        if guide.name.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Guide {} has an empty name",
                guide.staff_id
            )));
        }
        if !staff_ids.insert(&guide.staff_id) {
            return Err(seed_validation(&format!(
                "Duplicate staff_id: {}",
                guide.staff_id
            )));
        }
    }

    // Validate enrollment id uniqueness across assigned and unassigned students
    let mut enrollment_ids = HashSet::new();
    let all_students = seed
        .guides
        .iter()
        .flat_map(|g| g.students.iter())
        .chain(seed.unassigned.iter());

    for student in all_students {
        if student.name.trim().is_empty() {
            return Err(seed_validation(&format!(
                "Student {} has an empty name",
                student.enrollment_id
            )));
        }
        if !enrollment_ids.insert(&student.enrollment_id) {
            return Err(seed_validation(&format!(
                "Duplicate enrollment_id: {}",
                student.enrollment_id
            )));
        }
    }

    Ok(())
}
