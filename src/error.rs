//! Error types for deckplan library.

use std::fmt;
use std::io;
use thiserror::Error;

/// Result type alias for deckplan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading, validating or planning a deck.
///
/// Template diagnostics are not errors: they are returned as a
/// [`DiagnosticReport`](crate::diagnose::DiagnosticReport) even when they
/// describe fatal structural problems.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Persisted content is malformed (invalid JSON or wrong structure).
    #[error("Format error: {0}")]
    Format(String),

    /// The content document version is not supported.
    #[error("Unsupported content version: {0}")]
    UnsupportedVersion(String),

    /// One or more document invariants are violated.
    #[error("Validation failed: {}", format_violations(.0))]
    Validation(Vec<Violation>),

    /// No cookbook recipe exists for the requested content type or name.
    #[error("No layout recipe for '{0}'")]
    RecipeNotFound(String),

    /// The template container could not be read.
    #[error("Template error: {0}")]
    Template(String),

    /// The brand configuration is malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether this is a format error (including an unsupported version).
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_) | Error::UnsupportedVersion(_))
    }

    /// Violations carried by a validation error.
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Error::Validation(v) => Some(v),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Format(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Error::Io(e),
            _ => Error::Template(err.to_string()),
        }
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Template(format!("XML error: {}", err))
    }
}

/// A single broken invariant, located by a JSON-style path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Where the problem is (e.g. `slides[2].zones`)
    pub path: String,
    /// What is wrong
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

fn format_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
