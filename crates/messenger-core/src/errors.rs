use messenger_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using RegistryError
pub type Result<T> = std::result::Result<T, RegistryError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the messenger system. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and external API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MsgErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    ConstraintViolation,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    Concurrency,

    // Internal
    Internal,
}

impl MsgErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            MsgErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            MsgErrorKind::NotFound => "ERR_NOT_FOUND",
            MsgErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            MsgErrorKind::Io => "ERR_IO",
            MsgErrorKind::Serialization => "ERR_SERIALIZATION",
            MsgErrorKind::Persistence => "ERR_PERSISTENCE",
            MsgErrorKind::Concurrency => "ERR_CONCURRENCY",
            MsgErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// This error type provides a structured representation of errors with
/// classification fields for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct MsgError {
    kind: MsgErrorKind,
    op: Option<String>,
    name: Option<String>,
    partition: Option<String>,
    path: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<MsgError>>,
}

impl MsgError {
    /// Create a new error with the specified kind
    pub fn new(kind: MsgErrorKind) -> Self {
        Self {
            kind,
            op: None,
            name: None,
            partition: None,
            path: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add greeting name context
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add registry partition context
    pub fn with_partition(mut self, partition: impl Into<String>) -> Self {
        self.partition = Some(partition.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: MsgError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> MsgErrorKind {
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

    /// Get the greeting name context, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the partition context, if any
    pub fn partition(&self) -> Option<&str> {
        self.partition.as_deref()
    }

    /// Get the file path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&MsgError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for MsgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(name) = &self.name {
            write!(f, " (name: {})", name)?;
        }
        if let Some(partition) = &self.partition {
            write!(f, " (partition: {})", partition)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for MsgError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for registry and document operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RegistryError {
    /// Entry not found in registry
    #[error("Registry entry not found: {name}")]
    EntryNotFound { name: String },

    /// Partition name is not one of the documented values
    #[error("Unknown registry partition: {value}")]
    UnknownPartition { value: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from RegistryError to MsgError
///
/// This allows domain-level errors to flow into the canonical error facility
/// with their classification and context preserved.
impl From<RegistryError> for MsgError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::EntryNotFound { name } => MsgError::new(MsgErrorKind::NotFound)
                .with_name(name)
                .with_message("Registry entry not found"),

            RegistryError::UnknownPartition { value } => {
                MsgError::new(MsgErrorKind::InvalidInput)
                    .with_partition(value)
                    .with_message("Unknown registry partition")
            }

            RegistryError::Serialization { message } => {
                MsgError::new(MsgErrorKind::Serialization).with_message(message)
            }

            RegistryError::Internal { message } => {
                MsgError::new(MsgErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to RegistryError
impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_codes() {
        let cases = [
            (MsgErrorKind::InvalidInput, "ERR_INVALID_INPUT"),
            (MsgErrorKind::NotFound, "ERR_NOT_FOUND"),
            (MsgErrorKind::ConstraintViolation, "ERR_CONSTRAINT_VIOLATION"),
            (MsgErrorKind::Io, "ERR_IO"),
            (MsgErrorKind::Serialization, "ERR_SERIALIZATION"),
            (MsgErrorKind::Persistence, "ERR_PERSISTENCE"),
            (MsgErrorKind::Concurrency, "ERR_CONCURRENCY"),
            (MsgErrorKind::Internal, "ERR_INTERNAL"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_entry_not_found_carries_name() {
        let err: MsgError = RegistryError::EntryNotFound {
            name: "Alice".to_string(),
        }
        .into();
        assert_eq!(err.kind(), MsgErrorKind::NotFound);
        assert_eq!(err.name(), Some("Alice"));
    }

    #[test]
    fn test_display_includes_code_and_context() {
        let err = MsgError::new(MsgErrorKind::Io)
            .with_op("read_input")
            .with_path("/tmp/missing.csv")
            .with_message("No such file or directory");
        let rendered = format!("{}", err);
        assert!(rendered.contains("[ERR_IO]"));
        assert!(rendered.contains("read_input"));
        assert!(rendered.contains("/tmp/missing.csv"));
    }
}
