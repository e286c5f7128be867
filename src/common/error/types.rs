//! Crate-wide error type.
//!
//! Wraps the OOXML layer errors so callers (and the binaries) only deal with
//! one error type.
use thiserror::Error;

/// Main error type for deckhand operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from the OOXML (package, parts, XML) layer
    #[error(transparent)]
    Ooxml(#[from] crate::ooxml::error::OoxmlError),

    /// Invalid file format
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Slide or part referenced by index does not exist
    #[error("Component not found: {0}")]
    ComponentNotFound(String),

    /// Other errors
    #[error("{0}")]
    Other(String),
}

/// Result type for deckhand operations.
pub type Result<T> = std::result::Result<T, Error>;
