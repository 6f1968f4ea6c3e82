//! Seed digest canonicalization
//!
//! Computes stable SHA256 digests of seeds for the import ledger

use crate::seed::format_v0::SeedV0;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Canonical representation of a seed for digest calculation
#[derive(Debug, Clone, Serialize)]
struct CanonicalSeed {
    schema_version: u32,
    roster_name: String,
    guides: Vec<CanonicalGuide>,
    unassigned: Vec<CanonicalStudent>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalGuide {
    staff_id: String,
    name: String,
    salary: i64,
    students: Vec<CanonicalStudent>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq, PartialOrd, Ord)]
struct CanonicalStudent {
    enrollment_id: String,
    name: String,
}

/// Compute a stable digest for a seed
///
/// Returns a SHA256 hex digest of the canonicalized seed representation.
/// Guide and student ordering is normalized so that two seeds describing the
/// same roster digest identically.
pub fn compute_seed_digest(seed: &SeedV0) -> String {
    let canonical = canonicalize_seed(seed);

    let json = serde_json::to_string(&canonical).expect("canonical seed serializes infallibly");

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    hex::encode(result)
}

/// Canonicalize a seed for deterministic digest calculation
fn canonicalize_seed(seed: &SeedV0) -> CanonicalSeed {
    let mut guides: Vec<CanonicalGuide> = seed
        .guides
        .iter()
        .map(|g| {
            let mut students: Vec<CanonicalStudent> = g
                .students
                .iter()
                .map(|s| CanonicalStudent {
                    enrollment_id: s.enrollment_id.clone(),
                    name: s.name.clone(),
                })
                .collect();
            students.sort();

            CanonicalGuide {
                staff_id: g.staff_id.clone(),
                name: g.name.clone(),
                salary: g.salary,
                students,
            }
        })
        .collect();
    guides.sort();

    let mut unassigned: Vec<CanonicalStudent> = seed
        .unassigned
        .iter()
        .map(|s| CanonicalStudent {
            enrollment_id: s.enrollment_id.clone(),
            name: s.name.clone(),
        })
        .collect();
    unassigned.sort();

    CanonicalSeed {
        schema_version: seed.schema_version,
        roster_name: seed.roster.name.clone(),
        guides,
        unassigned,
    }
}
