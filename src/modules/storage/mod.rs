//! Storage module for the site's ledgers
//!
//! Every ledger (rate-limit buckets, content hashes, accepted testimonials)
//! is read and written through [`KeyValueStore`], the same get/set surface a
//! browser's local storage offers. [`InMemoryStore`] backs the services and
//! the tests; ledger values are versioned JSON envelopes (see [`ledger`]).

pub mod ledger;
mod memory_store;

use thiserror::Error;

pub use ledger::{read_ledger, write_ledger};
pub use memory_store::InMemoryStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage quota exceeded writing '{key}' ({needed} bytes, limit {limit})")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },

    #[error("ledger '{key}' is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("ledger '{key}' has schema version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        key: String,
        found: u32,
        supported: u32,
    },
}

impl StorageError {
    /// The store itself failed, as opposed to holding unreadable data
    pub fn is_outage(&self) -> bool {
        matches!(
            self,
            StorageError::Unavailable(_) | StorageError::QuotaExceeded { .. }
        )
    }
}

/// String key-value store the ledgers persist into
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
