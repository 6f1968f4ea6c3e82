//! Error handling for tutelage-store
//!
//! Wraps the tutelage-core RosterError with store-specific helpers

use tutelage_core::errors::{RosterError, RosterErrorKind};

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Create a migration error
pub fn migration_error(migration_id: &str, reason: &str) -> RosterError {
    RosterError::new(RosterErrorKind::Persistence)
        .with_op("migration")
        .with_message(format!("Migration {} failed: {}", migration_id, reason))
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> RosterError {
    RosterError::new(RosterErrorKind::ConstraintViolation)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: expected {}, got {}",
            migration_id, expected, actual
        ))
}

/// Create a seed validation error
pub fn seed_validation(reason: &str) -> RosterError {
    RosterError::new(RosterErrorKind::InvalidInput)
        .with_op("seed_parse")
        .with_message(reason.to_string())
}

/// Create an unknown-named-query error
pub fn unknown_named_query(name: &str) -> RosterError {
    RosterError::new(RosterErrorKind::NotFound)
        .with_op("named_query")
        .with_entity(name.to_string())
        .with_message(format!("No named query registered as '{}'", name))
}

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> RosterError {
    RosterError::new(RosterErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}
