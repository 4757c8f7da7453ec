//! Error types for keyspace-tree

/// Result type for keyspace-tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or resolving a key path
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Malformed key path {path:?} at byte {position}: {message}")]
    MalformedPath {
        path: String,
        position: usize,
        message: String,
    },
}

impl Error {
    pub fn malformed(path: impl Into<String>, position: usize, message: impl Into<String>) -> Self {
        Self::MalformedPath {
            path: path.into(),
            position,
            message: message.into(),
        }
    }
}
