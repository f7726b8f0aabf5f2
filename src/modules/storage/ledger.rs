//! Typed, versioned ledgers on top of [`KeyValueStore`].
//!
//! A ledger value is `{"version": 1, "items": [...]}`. A bare JSON array is
//! the older unversioned layout; it is read as version 0 and replaced by the
//! envelope on the next write.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{KeyValueStore, StorageError};
use crate::shared::constants::LEDGER_SCHEMA_VERSION;

#[derive(Debug, Serialize)]
struct LedgerEnvelope<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Debug, Deserialize)]
struct StoredEnvelope<T> {
    version: u32,
    items: Vec<T>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredLedger<T> {
    Versioned(StoredEnvelope<T>),
    Unversioned(Vec<T>),
}

/// Read every item of the ledger at `key`; a missing key is an empty ledger
pub fn read_ledger<T>(store: &dyn KeyValueStore, key: &str) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key)? else {
        return Ok(Vec::new());
    };

    let stored: StoredLedger<T> =
        serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_string(),
            source,
        })?;

    match stored {
        StoredLedger::Unversioned(items) => {
            tracing::debug!(key, "Read unversioned ledger, will upgrade on next write");
            Ok(items)
        }
        StoredLedger::Versioned(envelope) if envelope.version > LEDGER_SCHEMA_VERSION => {
            Err(StorageError::UnsupportedVersion {
                key: key.to_string(),
                found: envelope.version,
                supported: LEDGER_SCHEMA_VERSION,
            })
        }
        StoredLedger::Versioned(envelope) => Ok(envelope.items),
    }
}

/// Overwrite the ledger at `key` with `items` in the current envelope
pub fn write_ledger<T>(store: &dyn KeyValueStore, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
{
    let envelope = LedgerEnvelope {
        version: LEDGER_SCHEMA_VERSION,
        items,
    };
    let raw = serde_json::to_string(&envelope).map_err(|source| StorageError::Corrupt {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::InMemoryStore;

    #[test]
    fn test_missing_key_is_empty() {
        let store = InMemoryStore::new();
        let items: Vec<i64> = read_ledger(&store, "nothing").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_writes_versioned_envelope() {
        let store = InMemoryStore::new();
        write_ledger(&store, "hashes", &["abc".to_string(), "def".to_string()]).unwrap();

        let raw = store.get("hashes").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["items"], serde_json::json!(["abc", "def"]));

        let items: Vec<String> = read_ledger(&store, "hashes").unwrap();
        assert_eq!(items, vec!["abc", "def"]);
    }

    #[test]
    fn test_reads_unversioned_array() {
        let store = InMemoryStore::new();
        store
            .set("rate_limit_contact", "[1755075600000,1755075601000]")
            .unwrap();

        let items: Vec<i64> = read_ledger(&store, "rate_limit_contact").unwrap();
        assert_eq!(items, vec![1_755_075_600_000, 1_755_075_601_000]);
    }

    #[test]
    fn test_rejects_newer_schema() {
        let store = InMemoryStore::new();
        store.set("k", r#"{"version":7,"items":[]}"#).unwrap();

        let err = read_ledger::<i64>(&store, "k").unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion { found: 7, supported: 1, .. }
        ));
        assert!(!err.is_outage());
    }

    #[test]
    fn test_corrupt_value() {
        let store = InMemoryStore::new();
        store.set("k", "{not json").unwrap();

        let err = read_ledger::<i64>(&store, "k").unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }
}
