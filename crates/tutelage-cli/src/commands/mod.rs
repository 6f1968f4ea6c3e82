//! CLI command implementations

pub mod enroll;
pub mod seed;
pub mod tour;

use rusqlite::Connection;
use std::path::Path;

/// Default on-disk database location
pub const DEFAULT_DB_PATH: &str = ".tutelage/roster.db";

/// Open the store at `db_path`, configure it, and bring the schema up to date
pub fn open_store(db_path: &Path) -> Result<Connection, Box<dyn std::error::Error>> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut conn = tutelage_store::db::open(db_path)?;
    tutelage_store::db::configure(&conn)?;
    tutelage_store::migrations::apply_migrations(&mut conn)?;

    Ok(conn)
}
