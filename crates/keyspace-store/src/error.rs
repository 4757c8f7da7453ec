//! Error types for keyspace-store

/// Result type for keyspace-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in keyspace-store operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No value at the requested key
    #[error("Key not found: {key}")]
    NotFound { key: String },

    /// The store, or this part of its key space, does not accept the operation
    #[error("Cannot {operation} {key:?}: {reason}")]
    Unsupported {
        operation: &'static str,
        key: String,
        reason: String,
    },

    /// A mapper write outside the namespace it exposes
    #[error("Key {key:?} is outside the mapped namespace {prefix:?}")]
    OutsideNamespace { key: String, prefix: String },

    #[error("Failed to parse {format} namespace config: {message}")]
    ConfigParse { format: String, message: String },

    /// Key path error from keyspace-tree
    #[error(transparent)]
    Path(#[from] keyspace_tree::Error),
}

impl Error {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn read_only(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Unsupported {
            operation: "set",
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Whether this is plain absence rather than a misuse or a malformed key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
