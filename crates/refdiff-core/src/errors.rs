use thiserror::Error;

/// Result type alias using RefDiffError
pub type Result<T> = std::result::Result<T, RefDiffError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure the library can surface maps onto one of these kinds, and
/// each kind has a stable code usable in tests and by callers that need to
/// branch on the failure class without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdErrorKind {
    /// The root object handed to the path resolver was absent
    NullObject,
    /// An element could not be rendered into canonical text for fingerprinting
    Serialization,
    /// A registered field could not be read even though the receiver matched its type
    Access,
}

impl RdErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            RdErrorKind::NullObject => "ERR_NULL_OBJECT",
            RdErrorKind::Serialization => "ERR_SERIALIZATION",
            RdErrorKind::Access => "ERR_ACCESS",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing operation
/// had at hand: operation name, type and field.
#[derive(Debug, Clone, PartialEq)]
pub struct RdError {
    kind: RdErrorKind,
    op: Option<String>,
    type_name: Option<String>,
    field: Option<String>,
    message: String,
}

impl RdError {
    /// Create a new error with the specified kind
    pub fn new(kind: RdErrorKind) -> Self {
        Self {
            kind,
            op: None,
            type_name: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add type name context
    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Add field name context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> RdErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for RdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, " (type: {})", type_name)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for RdError {}

// ========== End Error Facility ==========

/// Error taxonomy for refdiff operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RefDiffError {
    /// The root object of a path resolution was absent
    #[error("Null object passed to {op}")]
    NullObject { op: String },

    /// An element could not be serialized into fingerprint input
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// A registered field reader rejected a receiver of its own declared type
    #[error("Field {field} of {type_name} could not be read")]
    FieldAccess { type_name: String, field: String },

    /// A field registered as a list did not yield a sequence of elements
    #[error("Field {field} of {type_name} is registered as a list but holds no sequence")]
    ShapeMismatch { type_name: String, field: String },
}

impl From<RefDiffError> for RdError {
    fn from(err: RefDiffError) -> Self {
        match err {
            RefDiffError::NullObject { op } => RdError::new(RdErrorKind::NullObject)
                .with_op(op)
                .with_message("Root object is absent"),

            RefDiffError::Serialization { message } => {
                RdError::new(RdErrorKind::Serialization).with_message(message)
            }

            RefDiffError::FieldAccess { type_name, field } => RdError::new(RdErrorKind::Access)
                .with_type_name(type_name)
                .with_field(field)
                .with_message("Field reader rejected its own declaring type"),

            RefDiffError::ShapeMismatch { type_name, field } => RdError::new(RdErrorKind::Access)
                .with_type_name(type_name)
                .with_field(field)
                .with_message("List-shaped field produced no elements"),
        }
    }
}

/// Conversion from serde_json::Error to RefDiffError
impl From<serde_json::Error> for RefDiffError {
    fn from(err: serde_json::Error) -> Self {
        RefDiffError::Serialization {
            message: err.to_string(),
        }
    }
}
