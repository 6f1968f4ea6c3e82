//! Demonstration query surfaces
//!
//! Read-only, typed queries over the roster schema. Every query that takes
//! input binds it as a SQL parameter; there is no string-concatenation path.
//!
//! - [`guides`]: projections, filters, and single-row lookups
//! - [`aggregates`]: count and max
//! - [`joins`]: inner, left outer, right outer, and eager-collection joins
//! - [`named`]: statements predefined in embedded SQL assets, invoked by name

pub mod aggregates;
pub mod guides;
pub mod joins;
pub mod named;

pub use aggregates::{count_guides, max_salary};
pub use guides::{
    all_guides, guide_by_name, guide_names, guides_named_like, guides_with_salary, salary_report,
    scan_guides, SalaryRow,
};
pub use joins::{
    guided_students, guides_with_students, students_with_guides, students_with_optional_guides,
    GuideRosterRow, GuideWithStudents, StudentRosterRow, StudentWithGuide,
};
