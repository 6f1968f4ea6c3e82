use serde::{Deserialize, Serialize};

/// Student - an enrolled learner, optionally assigned to a guide
///
/// A Student is a row mapped from the `students` table. The guide reference
/// is nullable: an unassigned student has `guide_id == None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Database row id
    pub id: i64,

    /// Enrollment identifier, unique across the roster (e.g. "ST109883")
    pub enrollment_id: String,

    /// Human-readable name
    pub name: String,

    /// Row id of the assigned guide, if any
    pub guide_id: Option<i64>,
}

impl Student {
    /// Check whether this student has a guide assigned
    pub fn is_assigned(&self) -> bool {
        self.guide_id.is_some()
    }
}

/// Insert-side counterpart of [`Student`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub enrollment_id: String,
    pub name: String,
    pub guide_id: Option<i64>,
}

impl NewStudent {
    pub fn new(
        enrollment_id: impl Into<String>,
        name: impl Into<String>,
        guide_id: Option<i64>,
    ) -> Self {
        Self {
            enrollment_id: enrollment_id.into(),
            name: name.into(),
            guide_id,
        }
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "student #{} ({}) {}", self.id, self.enrollment_id, self.name)?;
        match self.guide_id {
            Some(guide_id) => write!(f, ", guide #{}", guide_id),
            None => write!(f, ", unassigned"),
        }
    }
}
