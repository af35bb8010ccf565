use std::path::PathBuf;

/// Errors that abort an MS2 parse
///
/// Per-line problems never surface here; they are collected as
/// [`Diagnostic`](super::Diagnostic)s on the returned document.
#[derive(Debug, thiserror::Error)]
pub enum Ms2Error {
    /// The input could not be opened or read
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path of the input file (`<reader>` for in-memory sources)
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// A configured line or byte cap was reached
    #[error("Input limit exceeded: {0}")]
    LimitExceeded(String),
}

impl Ms2Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Ms2Error::Io {
            path: path.into(),
            source,
        }
    }
}
