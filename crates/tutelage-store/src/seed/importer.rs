//! Seed importer orchestration
//!
//! Imports roster seeds into SQLite within a single transaction

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use crate::seed::{compute_seed_digest, parse_seed_file};
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use tutelage_core::model::{NewGuide, NewStudent};

/// Import a seed file into the database
///
/// This is the main entry point for seed import. It:
/// 1. Parses and validates the seed YAML
/// 2. Computes the seed digest
/// 3. Skips the import if the digest is already in the ledger (idempotent)
/// 4. Inserts guides and students within a transaction
/// 5. Records the digest in the import ledger
///
/// Returns the seed digest on success
pub fn import_seed(path: &Path, conn: &mut Connection) -> Result<String> {
    let seed = parse_seed_file(path)?;

    let seed_digest = compute_seed_digest(&seed);

    // Idempotency: a seed already in the ledger is not re-imported
    let already_imported: Option<i64> = conn
        .query_row(
            "SELECT id FROM import_log WHERE seed_digest = ?1",
            [&seed_digest],
            |row| row.get(0),
        )
        .optional()
        .map_err(from_rusqlite)?;

    if already_imported.is_some() {
        tracing::debug!(digest = %seed_digest, "seed already imported, skipping");
        return Ok(seed_digest);
    }

    tracing::debug!(roster = %seed.roster.name, "beginning seed import transaction");
    let tx = conn.transaction().map_err(from_rusqlite)?;

    // Guides first: student rows reference their generated ids
    for seed_guide in &seed.guides {
        let guide_id = SqliteRepo::insert_guide_tx(
            &tx,
            &NewGuide::new(
                seed_guide.staff_id.as_str(),
                seed_guide.name.as_str(),
                seed_guide.salary,
            ),
        )?;

        for seed_student in &seed_guide.students {
            SqliteRepo::insert_student_tx(
                &tx,
                &NewStudent::new(
                    seed_student.enrollment_id.as_str(),
                    seed_student.name.as_str(),
                    Some(guide_id),
                ),
            )?;
        }
    }

    // Unassigned students carry a NULL guide reference
    for seed_student in &seed.unassigned {
        SqliteRepo::insert_student_tx(
            &tx,
            &NewStudent::new(
                seed_student.enrollment_id.as_str(),
                seed_student.name.as_str(),
                None,
            ),
        )?;
    }

    // Record the import in the ledger
    let now = chrono::Utc::now().timestamp();
    tx.execute(
        "INSERT INTO import_log (seed_digest, roster_name, imported_at) VALUES (?1, ?2, ?3)",
        rusqlite::params![seed_digest, seed.roster.name, now],
    )
    .map_err(from_rusqlite)?;

    tx.commit().map_err(from_rusqlite)?;
    tracing::debug!(digest = %seed_digest, "seed import committed");

    Ok(seed_digest)
}
