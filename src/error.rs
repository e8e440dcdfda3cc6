//! Error types.
//!
//! Structural misuse of a graph (stale or foreign handles, double erasure,
//! re-splicing a linked node) is a contract violation and panics. The only
//! recoverable condition is a key collision in an [`IndexedGraph`].
//!
//! [`IndexedGraph`]: crate::graph::IndexedGraph

use thiserror::Error;

/// Result alias for key-indexed operations.
pub type Result<T, K> = std::result::Result<T, IndexError<K>>;

/// Recoverable failures of a key-indexed graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IndexError<K> {
    /// A live vertex already holds this key. The graph was not modified.
    #[error("a live vertex already holds key {0:?}")]
    AlreadyExists(K),
}

impl<K> IndexError<K> {
    /// The key that caused the failure.
    pub fn key(&self) -> &K {
        match self {
            IndexError::AlreadyExists(key) => key,
        }
    }

    /// Consumes the error, returning the key.
    pub fn into_key(self) -> K {
        match self {
            IndexError::AlreadyExists(key) => key,
        }
    }
}
