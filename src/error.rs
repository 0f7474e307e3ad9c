//! Error handling for building and writing XML documents
use std::path::PathBuf;

/// A result type for document operations, which can be either a successful value or an error.
pub type XmlResult<T> = std::result::Result<T, XmlError>;

/// An error that occurred while accessing, reading, or writing a document.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    /// A file could not be opened for reading, or created for writing
    #[error("Failed to open {}: {source}", .path.display())]
    FailedToOpen {
        /// The path that could not be opened
        path: PathBuf,

        /// The underlying error reported by the OS
        source: std::io::Error,
    },

    /// The requested operation exists in the API but has no implementation
    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),

    /// A lookup by name found no match
    #[error("No {kind} named `{name}`")]
    NotFound {
        /// What was being looked up, `attribute` or `child`
        kind: &'static str,

        /// The name that was searched for
        name: String,
    },

    /// IO error occurred while writing to a sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be entity encoded
    #[error("Could not encode entities: {0}")]
    Encode(String),
}
impl XmlError {
    pub(crate) fn attribute_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "attribute",
            name: name.to_string(),
        }
    }

    pub(crate) fn child_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: "child",
            name: name.to_string(),
        }
    }

    /// Returns true if this error is a failed lookup.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
