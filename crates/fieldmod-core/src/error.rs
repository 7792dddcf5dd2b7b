//! Error types for the Fieldmod core library
//!
//! This module defines the error taxonomy of the modifier engine, using thiserror
//! for the structured kinds and forwarding parser errors verbatim.

use std::fmt;
use std::num::ParseFloatError;
use thiserror::Error;

/// Main error type for modifier operations
#[derive(Error, Debug)]
pub enum Error {
    /// The modifier, or the modifier + attribute combination, has no behavior
    #[error("Modifier not implemented: {name} for attribute '{attribute}'")]
    NotImplemented {
        name: String,
        attribute: String,
    },

    /// The modifier and attribute are known but the selected variant is not
    #[error("Unsupported format: '{variant}' for attribute '{attribute}'")]
    UnsupportedFormat {
        variant: String,
        attribute: String,
    },

    /// The scalar handed to a modifier has the wrong runtime type
    #[error("Type mismatch in {modifier}: expected {expected}, found {found}")]
    TypeMismatch {
        modifier: String,
        expected: String,
        found: String,
    },

    /// Numeric parse failure, forwarded from the float parser
    #[error(transparent)]
    ParseNumber(#[from] ParseFloatError),

    /// Timestamp parse failure, forwarded from chrono
    #[error(transparent)]
    ParseTime(#[from] chrono::ParseError),

    /// Timestamp text does not have the shape of the fixed layout
    #[error("parsing time \"{input}\" as \"{layout}\": input does not match layout")]
    TimeLayout {
        input: String,
        layout: &'static str,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Discriminant of [`Error`] for callers that branch on the failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotImplemented,
    UnsupportedFormat,
    TypeMismatch,
    ParseNumber,
    ParseTime,
    Configuration,
}

impl Error {
    /// Build a `NotImplemented` error
    pub fn not_implemented(name: impl Into<String>, attribute: impl Into<String>) -> Self {
        Error::NotImplemented {
            name: name.into(),
            attribute: attribute.into(),
        }
    }

    /// Build an `UnsupportedFormat` error
    pub fn unsupported_format(variant: impl Into<String>, attribute: impl Into<String>) -> Self {
        Error::UnsupportedFormat {
            variant: variant.into(),
            attribute: attribute.into(),
        }
    }

    /// Build a `TypeMismatch` error
    pub fn type_mismatch(
        modifier: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Error::TypeMismatch {
            modifier: modifier.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a `TimeLayout` error
    pub fn time_layout(input: impl Into<String>, layout: &'static str) -> Self {
        Error::TimeLayout {
            input: input.into(),
            layout,
        }
    }

    /// The failure class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotImplemented { .. } => ErrorKind::NotImplemented,
            Error::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Error::TypeMismatch { .. } => ErrorKind::TypeMismatch,
            Error::ParseNumber(_) => ErrorKind::ParseNumber,
            Error::ParseTime(_) | Error::TimeLayout { .. } => ErrorKind::ParseTime,
            Error::Configuration { .. } => ErrorKind::Configuration,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotImplemented => write!(f, "not_implemented"),
            ErrorKind::UnsupportedFormat => write!(f, "unsupported_format"),
            ErrorKind::TypeMismatch => write!(f, "type_mismatch"),
            ErrorKind::ParseNumber => write!(f, "parse_number"),
            ErrorKind::ParseTime => write!(f, "parse_time"),
            ErrorKind::Configuration => write!(f, "configuration"),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Configuration {
            message: err.to_string(),
            source: Some(err.into()),
        }
    }
}
