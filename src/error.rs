//! Error types for the breeding engine
//!
//! Every failure is returned as data through `EngineResult`; the engine never
//! panics on bad input and never logs. Validation failures accumulate every
//! field message before returning, lifecycle and referential failures abort
//! immediately because later checks would be meaningless.

use serde::Serialize;
use thiserror::Error;

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// A single field-scoped validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field the message is scoped to, in the payload's naming
    pub field: String,
    /// Human-readable message, surfaced verbatim to the caller
    pub message: String,
}

impl FieldError {
    /// Create a field error
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Standard message for a missing required field
    pub fn missing(field: impl Into<String>) -> Self {
        Self::new(field, "is required")
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Accumulated validation failures for one write attempt
///
/// Collects every failing field before the write is rejected, so callers can
/// present the full list instead of one error per round trip.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an accumulator holding a single error
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self(vec![FieldError::new(field, message)])
    }

    /// Add an error
    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    /// Add an error from field and message
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError::new(field, message));
    }

    /// Absorb another accumulator
    pub fn merge(&mut self, other: ValidationErrors) {
        self.0.extend(other.0);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over the collected errors
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    /// `Ok(())` when empty, otherwise the full list as an `EngineError`
    pub fn into_result(self) -> EngineResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(EngineError::Validation(self))
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self(vec![error])
    }
}

/// Persistence collaborator failure
///
/// The engine performs no retries; the caller's transaction rolls back and
/// the caller decides whether to retry or alert.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct StorageError {
    message: String,
}

impl StorageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Main error type for engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// One or more field-scoped validation failures; always recoverable
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The target record is in a terminal status and is read-only
    #[error("{kind} record is finalized ('{status}') and can no longer change")]
    LifecycleLocked { kind: &'static str, status: String },

    /// A referenced record does not exist; a client input error, not a fault
    #[error("referenced {kind} {id} does not exist")]
    Referential { kind: &'static str, id: u64 },

    /// A cross-record ceiling was hit; message carries the count and limit
    #[error("{message} ({count} of {limit})")]
    Capacity {
        message: String,
        count: usize,
        limit: usize,
    },

    /// Persistence collaborator failure, surfaced as-is
    #[error("storage failure: {0}")]
    Storage(#[from] StorageError),
}

impl EngineError {
    /// Shorthand for a single-field validation failure
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        EngineError::Validation(ValidationErrors::single(field, message))
    }

    /// Stable kind tag for structured output
    pub fn kind_tag(&self) -> &'static str {
        match self {
            EngineError::Validation(_) => "validation",
            EngineError::LifecycleLocked { .. } => "lifecycle-locked",
            EngineError::Referential { .. } => "referential",
            EngineError::Capacity { .. } => "capacity",
            EngineError::Storage(_) => "storage",
        }
    }
}
