//! Error types for the domain layer.
//!
//! Two disjoint families live here:
//! - configuration failures (`ConfigurationError`, `SchemaError`), raised while a
//!   developer declares a command and always fatal to that registration;
//! - conversion failures (`ConversionError`), raised per token at invocation
//!   time and meant to be turned into an "invalid argument" reply.

use std::fmt;
use thiserror::Error;

use super::CommandFacet;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: u64,
        max: u64,
        actual: u64,
    },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: u64, max: u64, actual: u64) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::EmptyField { .. } => ErrorCode::EmptyField,
            ValidationError::OutOfRange { .. } => ErrorCode::OutOfRange,
        }
    }
}

/// A raw token could not be converted into its declared type.
///
/// Recoverable: the dispatcher reports it to the end user and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{raw}' is not a valid {expected}: {reason}")]
pub struct ConversionError {
    expected: String,
    raw: String,
    reason: String,
}

impl ConversionError {
    /// Creates a conversion error for `raw` which was expected to be `expected`.
    pub fn new(
        expected: impl Into<String>,
        raw: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            expected: expected.into(),
            raw: raw.into(),
            reason: reason.into(),
        }
    }

    /// Name of the type the token was expected to satisfy.
    pub fn expected(&self) -> &str {
        &self.expected
    }

    /// The offending raw token.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Why the token was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConversionFailed
    }
}

/// Errors raised while building a single argument schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("Argument name cannot be empty")]
    EmptyName,

    #[error("Argument '{argument}' is required and cannot have a default value")]
    DefaultOnRequired { argument: String },

    #[error("Default value for argument '{argument}' is invalid: {source}")]
    InvalidDefault {
        argument: String,
        #[source]
        source: ConversionError,
    },
}

impl SchemaError {
    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            SchemaError::EmptyName => ErrorCode::EmptyField,
            SchemaError::DefaultOnRequired { .. } => ErrorCode::DefaultOnRequired,
            SchemaError::InvalidDefault { .. } => ErrorCode::InvalidDefault,
        }
    }
}

/// Developer-facing errors from a malformed command declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Command name cannot be empty")]
    EmptyCommandName,

    #[error("Command '{command}' already has a set {facet}")]
    FacetAlreadySet { command: String, facet: CommandFacet },

    #[error("Command '{command}' cannot have multiple arguments named '{argument}'")]
    DuplicateArgument { command: String, argument: String },

    #[error("No execution for command '{command}' set")]
    MissingExecution { command: String },

    #[error("Command '{command}' has an invalid cooldown: {source}")]
    InvalidCooldown {
        command: String,
        #[source]
        source: ValidationError,
    },

    #[error("Command '{command}' cannot have an empty prefix")]
    EmptyPrefix { command: String },

    #[error("Command '{command}' has an invalid argument: {source}")]
    InvalidArgument {
        command: String,
        #[source]
        source: SchemaError,
    },
}

impl ConfigurationError {
    /// Creates a facet already set error.
    pub fn already_set(command: impl Into<String>, facet: CommandFacet) -> Self {
        ConfigurationError::FacetAlreadySet {
            command: command.into(),
            facet,
        }
    }

    /// Returns the error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            ConfigurationError::EmptyCommandName => ErrorCode::EmptyField,
            ConfigurationError::FacetAlreadySet { .. } => ErrorCode::FacetAlreadySet,
            ConfigurationError::DuplicateArgument { .. } => ErrorCode::DuplicateArgument,
            ConfigurationError::MissingExecution { .. } => ErrorCode::MissingExecution,
            ConfigurationError::InvalidCooldown { .. } => ErrorCode::InvalidCooldown,
            ConfigurationError::EmptyPrefix { .. } => ErrorCode::EmptyField,
            ConfigurationError::InvalidArgument { source, .. } => source.code(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,

    // Conversion errors
    ConversionFailed,

    // Schema errors
    DefaultOnRequired,
    InvalidDefault,

    // Command configuration errors
    FacetAlreadySet,
    DuplicateArgument,
    MissingExecution,
    InvalidCooldown,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::ConversionFailed => "CONVERSION_FAILED",
            ErrorCode::DefaultOnRequired => "DEFAULT_ON_REQUIRED",
            ErrorCode::InvalidDefault => "INVALID_DEFAULT",
            ErrorCode::FacetAlreadySet => "FACET_ALREADY_SET",
            ErrorCode::DuplicateArgument => "DUPLICATE_ARGUMENT",
            ErrorCode::MissingExecution => "MISSING_EXECUTION",
            ErrorCode::InvalidCooldown => "INVALID_COOLDOWN",
        };
        write!(f, "{}", s)
    }
}
