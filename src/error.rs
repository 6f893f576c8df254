//! Error types for evictsim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in evictsim.
///
/// Simulation itself is pure computation, so the only failures there are
/// bad inputs. I/O and JSON errors come from loading configuration and
/// exporting results.
#[derive(Debug, Error)]
pub enum Error {
    /// A parameter is outside its valid domain.
    ///
    /// Raised eagerly, before any work is done: zero trials, an empty
    /// reference sequence, fractions outside `(0, 1)`, and so on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error from reading a config file or writing an export.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON in a config file, or a failed JSON export.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A presenter could not draw the results.
    #[error("render failed: {0}")]
    Render(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidArgument`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
