//! Error types for tag-common

use std::io;

use thiserror::Error;

/// Result type alias for tag-common operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting tags
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A source could not be opened or read, or a sink could not be written.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    /// Processing was requested before every input was selected.
    #[error("Please select both a text file and a stop words file ({0} missing).")]
    MissingInput(&'static str),

    /// Saving was requested with an empty frequency table.
    #[error("No tags to save.")]
    NothingToSave,
}

impl Error {
    pub(crate) fn io(context: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this error came from storage access.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}
