//! Error types for the wireform library
//!
//! This module defines the error handling system for wireform, using thiserror
//! for ergonomic error definitions and anyhow as the opaque source type for
//! faults raised by injected collaborators.
//!
//! The library is deliberately permissive about absent or null wire fields
//! (they coalesce to `None`); errors are reserved for the typed boundary:
//! payload decoding, timestamp parsing, and registry enrichment.

use thiserror::Error;

/// Main error type for wireform operations
#[derive(Error, Debug)]
pub enum Error {
    /// Wire payload could not be decoded into the expected record type
    #[error("Wire decode failed: {message}")]
    Decode {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// An ISO-8601 timestamp string failed to parse
    #[error("Timestamp parse failed: {field} = {value:?}")]
    Timestamp {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A fault raised by the user registry collaborator during enrichment
    #[error("Registry error: {message}")]
    Registry {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode {
            message: err.to_string(),
            source: err,
        }
    }
}
