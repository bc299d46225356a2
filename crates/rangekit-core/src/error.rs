//! Error handling for RangeKit.
//!
//! The geometry core itself has no failure modes: out-of-range values are
//! clamped, and gestures against vanished buttons are silent no-ops. The
//! errors here cover the edges where lookups can legitimately miss: chart
//! and button ids, range-catalog references.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Chart data error type.
///
/// Represents failed lookups against the chart model: unknown charts,
/// buttons, or linked ranges.
#[derive(Error, Debug, Clone)]
pub enum ChartError {
    /// Chart id not present in the store
    #[error("Chart not found: {id}")]
    ChartNotFound {
        /// The chart id that was not found.
        id: String,
    },

    /// Button id not present in the chart
    #[error("Button not found: {id}")]
    ButtonNotFound {
        /// The button id that was not found.
        id: String,
    },

    /// Linked range id not present in the catalog
    #[error("Unknown range: {id}")]
    UnknownRange {
        /// The range id that was not found.
        id: String,
    },

    /// Generic chart error
    #[error("Chart error: {message}")]
    Other {
        /// The error message.
        message: String,
    },
}

/// Main error type for RangeKit.
///
/// A unified error type used in public APIs that can fail.
#[derive(Error, Debug)]
pub enum Error {
    /// Chart data error
    #[error(transparent)]
    Chart(#[from] ChartError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
