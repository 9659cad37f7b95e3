//! Error types for the periscope view core
//!
//! This module defines the error types shared by the horizon geometry,
//! the vessel information store and the viewer session.

use std::fmt;

/// Result type for periscope view operations
pub type Result<T> = std::result::Result<T, Error>;

/// Periscope view errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed nesting or content in a persisted information document
    ParseError(String),

    /// A section, sub-heading or vessel targeted by an operation does not exist
    /// (or a rename target name is already taken)
    NotFound(String),

    /// Invalid geometry input (negative height, empty bounding box, ...)
    DomainError(String),

    /// Filesystem failure while reading or writing a document
    Io(String),

    /// Singleton or session setup failed
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ParseError(msg) => write!(f, "Parse error: {}", msg),
            Error::NotFound(msg) => write!(f, "Not found: {}", msg),
            Error::DomainError(msg) => write!(f, "Domain error: {}", msg),
            Error::Io(msg) => write!(f, "I/O error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

// ===== ERROR MACROS =====

/// Build an [`Error`] of the given variant and log it at ERROR severity
///
/// # Example
///
/// ```ignore
/// let err = engine_err!("periscope::InfoStore", NotFound, "no section '{}'", heading);
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $kind:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::periscope::Error::$kind(message)
    }};
}

/// Log and return early with an [`Error`] of the given variant
///
/// # Example
///
/// ```ignore
/// if footprint <= 0.0 {
///     engine_bail!("periscope::View", DomainError, "model has no footprint");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $kind:ident, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $kind, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
