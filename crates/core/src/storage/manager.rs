use crate::models::item::FinanceItem;

use super::backend::StorageBackend;

/// High-level persistence: the whole item collection as one JSON array in a
/// backend slot.
///
/// Loading fails soft in every case. A store that cannot be read or parsed
/// degrades to an empty collection; the caller never sees a storage error.
/// Writing likewise never propagates failures upward.
pub struct StorageManager;

impl StorageManager {
    /// Load the persisted collection.
    ///
    /// Flow: backend read → JSON array → safe-number sanitizer per record.
    /// Absence, read failure, and parse failure all yield an empty vec.
    pub fn load_items(backend: &dyn StorageBackend) -> Vec<FinanceItem> {
        let raw = match backend.read() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("Failed to read persisted items: {e}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<FinanceItem>>(&raw) {
            Ok(mut items) => {
                for item in &mut items {
                    item.sanitize();
                }
                items
            }
            Err(e) => {
                log::warn!("Discarding malformed item store: {e}");
                Vec::new()
            }
        }
    }

    /// Persist the full collection, overwriting whatever was stored before.
    /// No partial or diff writes. Failures are logged and swallowed.
    pub fn persist_items(backend: &dyn StorageBackend, items: &[FinanceItem]) {
        let payload = match serde_json::to_string(items) {
            Ok(payload) => payload,
            Err(e) => {
                log::warn!("Failed to serialize item store: {e}");
                return;
            }
        };

        if let Err(e) = backend.write(&payload) {
            log::warn!("Failed to persist item store: {e}");
        }
    }
}
