//! Key/value persistence for small client-side values.
//!
//! The store only ever holds strings. Today that is the session's
//! access token, saved under [`ACCESS_TOKEN_KEY`].

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key the session token is persisted under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Errors that can occur while touching persistent storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to read storage file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write storage file '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse storage file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Synchronous string store keyed by name.
///
/// Implementations must be shareable across tasks; every call is a
/// complete read-modify-write.
pub trait Storage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a key that is not present is not an error.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
