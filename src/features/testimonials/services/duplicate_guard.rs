use std::sync::Arc;

use crate::modules::storage::{read_ledger, write_ledger, KeyValueStore, StorageError};
use crate::shared::constants::TESTIMONIAL_HASHES_KEY;

/// Fingerprint of a testimonial's text, used only to spot exact resubmissions.
///
/// 32-bit `h * 31 + c` over UTF-16 code units with wrap-around, absolute
/// value in lowercase base 36. Not collision resistant and not meant to be.
pub fn content_hash(content: &str) -> String {
    let hash = content
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)));
    to_base36(hash.unsigned_abs())
}

fn to_base36(mut n: u32) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

/// Ledger of hashes of accepted testimonial texts
pub struct DuplicateGuard {
    store: Arc<dyn KeyValueStore>,
}

impl DuplicateGuard {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Hashes seen so far; an unreadable ledger counts as empty
    pub fn known_hashes(&self) -> Vec<String> {
        read_ledger(self.store.as_ref(), TESTIMONIAL_HASHES_KEY).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Testimonial hash ledger unreadable");
            Vec::new()
        })
    }

    pub fn is_duplicate(&self, hash: &str) -> bool {
        self.known_hashes().iter().any(|known| known == hash)
    }

    /// Record `hash` as accepted. Recording a known hash is a no-op.
    pub fn remember(&self, hash: &str) -> Result<(), StorageError> {
        let mut hashes = self.known_hashes();
        if hashes.iter().any(|known| known == hash) {
            return Ok(());
        }
        hashes.push(hash.to_string());
        write_ledger(self.store.as_ref(), TESTIMONIAL_HASHES_KEY, &hashes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::storage::InMemoryStore;
    use crate::shared::test_helpers::memory_store;

    #[test]
    fn test_known_values() {
        assert_eq!(content_hash(""), "0");
        assert_eq!(content_hash("a"), "2p"); // 97
        assert_eq!(content_hash("ab"), "2e9"); // 97 * 31 + 98 = 3105
    }

    #[test]
    fn test_hash_uses_utf16_units() {
        // "é" is a single UTF-16 unit (233), "😀" a surrogate pair
        assert_eq!(content_hash("é"), "6h");
        let pair = (0xD83Di32).wrapping_mul(31).wrapping_add(0xDE00);
        assert_eq!(content_hash("😀"), to_base36(pair.unsigned_abs()));
    }

    #[test]
    fn test_wraps_and_stays_short() {
        let long = "Ótimo atendimento, recomendo! ".repeat(40);
        let hash = content_hash(&long);
        assert!(!hash.is_empty() && hash.len() <= 7);
        assert!(hash.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_eq!(hash, content_hash(&long));
    }

    #[test]
    fn test_extreme_hash_value() {
        assert_eq!(to_base36(u32::MAX), "1z141z3");
        assert_eq!(to_base36(2_147_483_648), "zik0zk");
    }

    #[test]
    fn test_remember_then_detect() {
        let guard = DuplicateGuard::new(memory_store());
        let hash = content_hash("Ótimo atendimento, recomendo");

        assert!(!guard.is_duplicate(&hash));
        guard.remember(&hash).unwrap();
        assert!(guard.is_duplicate(&hash));
        assert!(!guard.is_duplicate(&content_hash("Outro texto qualquer")));

        guard.remember(&hash).unwrap();
        assert_eq!(guard.known_hashes().len(), 1);
    }

    #[test]
    fn test_unavailable_store_sees_no_duplicates() {
        let guard = DuplicateGuard::new(Arc::new(InMemoryStore::unavailable()));
        assert!(!guard.is_duplicate("2p"));
        assert!(guard.remember("2p").is_err());
    }
}
