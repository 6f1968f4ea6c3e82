//! Domain models for the mentoring roster
//!
//! Guides mentor students; a student may be unassigned (nullable guide
//! reference). Rows are created by insertion and read via queries, never
//! updated or deleted by the demo flows.

mod guide;
mod student;

pub use guide::{Guide, NewGuide};
pub use student::{NewStudent, Student};
