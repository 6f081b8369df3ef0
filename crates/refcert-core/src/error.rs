//! # Error Hierarchy
//!
//! Structured error types for the certification core, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Identifier parse failures carry the offending text so the HTTP layer
//! can report them to the client verbatim. Everything else in this crate
//! is a total function: levels, versions and certifications are closed
//! enumerations, so there is no runtime "out of domain" error.

use thiserror::Error;

use crate::identity::IdentifierKind;

/// Top-level error type for the certification core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefcertError {
    /// Identifier parse or construction failure.
    #[error("identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// Domain primitive validation failure.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised by the typed identifier family.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// The text failed length, prefix, or alphabet validation for `kind`.
    #[error("malformed {kind} identifier: \"{value}\" (expected {expected_len} characters starting with \"{prefix}\")", expected_len = .kind.text_len(), prefix = .kind.prefix())]
    Malformed {
        /// The identifier kind the caller asked for.
        kind: IdentifierKind,
        /// The text that was rejected.
        value: String,
    },

    /// The text does not start with any known identifier prefix.
    #[error("unrecognized identifier: \"{value}\" (no known kind prefix)")]
    UnknownPrefix {
        /// The text that was rejected.
        value: String,
    },

    /// A creation timestamp cannot be represented in the 48-bit time field.
    #[error("timestamp {millis}ms is outside the representable identifier range")]
    TimestampOutOfRange {
        /// Unix milliseconds of the rejected timestamp.
        millis: i64,
    },
}

/// Validation errors for domain primitives parsed from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Not one of the declared certification levels.
    #[error("unknown certification level: \"{0}\"")]
    UnknownLevel(String),

    /// Not one of the declared rulebook versions.
    #[error("unknown rulebook version: \"{0}\"")]
    UnknownVersion(String),

    /// Certification text is not of the form `level/version`.
    #[error("invalid certification: \"{0}\" (expected <level>/<version>)")]
    InvalidCertification(String),

    /// Not one of the declared identifier kinds.
    #[error("unknown identifier kind: \"{0}\"")]
    UnknownIdentifierKind(String),

    /// Timestamp string or value is not valid UTC.
    #[error("invalid timestamp: \"{value}\" ({reason})")]
    InvalidTimestamp {
        /// The input that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}
