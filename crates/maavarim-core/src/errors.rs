use thiserror::Error;

/// Result type alias using MaavarimError
pub type Result<T> = std::result::Result<T, MaavarimError>;

/// Result type alias using the structured ExError
pub type ExResult<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that the CLI prints and tests
/// assert on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    MalformedInput,
    UnsupportedFormat,
    NotFound,
    ConstraintViolation,
    NotImplemented,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::MalformedInput => "ERR_MALFORMED_INPUT",
            ExErrorKind::UnsupportedFormat => "ERR_UNSUPPORTED_FORMAT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::NotImplemented => "ERR_NOT_IMPLEMENTED",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus enough context
/// (operation, record id, message) to explain the failure to an operator.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add record ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, " <- {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised by validation, lookup and import
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaavarimError {
    /// A required text field was empty after trimming
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Event date could not be parsed as YYYY-MM-DD
    #[error("Invalid date '{value}', expected YYYY-MM-DD")]
    InvalidDate { value: String },

    /// Employee with the given id does not exist
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: i64 },

    /// Import kind key is not one of the known kinds
    #[error("Unknown import kind: {key}")]
    UnknownImportKind { key: String },

    /// Import kind is known but has no processor yet
    #[error("Import kind '{key}' is not supported yet")]
    ImportKindNotSupported { key: String },

    /// File extension is not an accepted spreadsheet format
    #[error("Unsupported file type '{extension}', upload a CSV or Excel file")]
    UnsupportedFileType { extension: String },

    /// Spreadsheet content could not be read
    #[error("Malformed spreadsheet: {reason}")]
    MalformedSpreadsheet { reason: String },
}

impl From<MaavarimError> for ExError {
    fn from(err: MaavarimError) -> Self {
        let message = err.to_string();
        match err {
            MaavarimError::EmptyField { field } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate")
                .with_entity_id(field)
                .with_message(message),

            MaavarimError::InvalidDate { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("parse_date")
                .with_message(message),

            MaavarimError::EmployeeNotFound { employee_id } => {
                ExError::new(ExErrorKind::NotFound)
                    .with_op("get_employee")
                    .with_entity_id(employee_id.to_string())
                    .with_message(message)
            }

            MaavarimError::UnknownImportKind { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("import")
                .with_message(message),

            MaavarimError::ImportKindNotSupported { .. } => {
                ExError::new(ExErrorKind::NotImplemented)
                    .with_op("import")
                    .with_message(message)
            }

            MaavarimError::UnsupportedFileType { .. } => {
                ExError::new(ExErrorKind::UnsupportedFormat)
                    .with_op("import")
                    .with_message(message)
            }

            MaavarimError::MalformedSpreadsheet { .. } => {
                ExError::new(ExErrorKind::MalformedInput)
                    .with_op("parse_spreadsheet")
                    .with_message(message)
            }
        }
    }
}
