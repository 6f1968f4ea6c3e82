use serde::Serialize;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the tutelage workspace. Each kind maps to a stable error code that can
/// be used for programmatic error handling and test assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RosterErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl RosterErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            RosterErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            RosterErrorKind::NotFound => "ERR_NOT_FOUND",
            RosterErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            RosterErrorKind::Io => "ERR_IO",
            RosterErrorKind::Serialization => "ERR_SERIALIZATION",
            RosterErrorKind::Persistence => "ERR_PERSISTENCE",
            RosterErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides a structured representation of errors with classification fields
/// for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct RosterError {
    kind: RosterErrorKind,
    op: Option<String>,
    entity: Option<String>,
    message: String,
}

impl RosterError {
    /// Create a new error with the specified kind
    pub fn new(kind: RosterErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity context (staff id, enrollment id, query name)
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> RosterErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity context, if any
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity) = &self.entity {
            write!(f, " (entity: {})", entity)?;
        }
        Ok(())
    }
}

impl std::error::Error for RosterError {}

/// Conversion from serde_json::Error to RosterError
impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::new(RosterErrorKind::Serialization).with_message(err.to_string())
    }
}

/// Conversion from std::io::Error to RosterError
impl From<std::io::Error> for RosterError {
    fn from(err: std::io::Error) -> Self {
        RosterError::new(RosterErrorKind::Io).with_message(err.to_string())
    }
}
