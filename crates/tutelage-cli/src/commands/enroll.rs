//! Enroll command
//!
//! Inserts one student inside a transaction, optionally assigned to a guide
//! resolved by staff id. With no --staff-id the student is enrolled
//! unassigned (NULL guide reference).
//!
//! Usage: tutelage enroll --enrollment-id <ID> --name <NAME> [--staff-id <STAFF>] [--db <DB>]

use clap::Args;
use std::path::PathBuf;
use tutelage_core::model::NewStudent;
use tutelage_core::{RosterError, RosterErrorKind};
use tutelage_store::repo::SqliteRepo;

#[derive(Debug, Args)]
pub struct EnrollArgs {
    /// Enrollment identifier for the new student
    #[arg(long)]
    pub enrollment_id: String,

    /// Student name
    #[arg(long)]
    pub name: String,

    /// Staff identifier of the guide to assign; omit to enroll unassigned
    #[arg(long)]
    pub staff_id: Option<String>,

    /// Path to the SQLite database
    #[arg(long, default_value = super::DEFAULT_DB_PATH)]
    pub db: PathBuf,
}

/// Execute enroll
pub fn execute(args: EnrollArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = super::open_store(&args.db)?;

    let tx = conn.transaction()?;

    let guide_id = match &args.staff_id {
        Some(staff_id) => {
            let guide = SqliteRepo::get_guide_by_staff_id(&tx, staff_id)?.ok_or_else(|| {
                RosterError::new(RosterErrorKind::NotFound)
                    .with_op("enroll")
                    .with_entity(staff_id.clone())
                    .with_message("no guide with that staff id")
            })?;
            Some(guide.id)
        }
        None => None,
    };

    let student_id = SqliteRepo::insert_student_tx(
        &tx,
        &NewStudent::new(args.enrollment_id.as_str(), args.name.as_str(), guide_id),
    )?;

    tx.commit()?;

    match guide_id {
        Some(guide_id) => println!(
            "✓ Enrolled student #{} ({}) with guide #{}",
            student_id, args.enrollment_id, guide_id
        ),
        None => println!(
            "✓ Enrolled student #{} ({}) unassigned",
            student_id, args.enrollment_id
        ),
    }

    Ok(())
}
