pub mod errors;
pub mod ids;
pub mod models;
pub mod services;
pub mod storage;

use uuid::Uuid;

use errors::CoreError;
use models::calculation::{CalculationResult, OperationKind, PreviewText};
use models::item::{FinanceItem, ItemPatch};
use services::calculator;
use services::item_service::ItemService;
use services::notification_service::NotificationCenter;
use storage::backend::{NullStorage, StorageBackend};
use storage::manager::StorageManager;

/// Main entry point for the Finman core library.
///
/// Owns the item collection, the storage backend, and the notification
/// queue; all mutable state lives here and is passed down explicitly. The
/// collection is rehydrated from the backend when the tracker is opened,
/// and the whole collection is persisted before every mutating call
/// returns, so a reopened tracker always observes the latest write.
#[must_use]
pub struct FinanceTracker {
    items: Vec<FinanceItem>,
    item_service: ItemService,
    notifications: NotificationCenter,
    backend: Box<dyn StorageBackend>,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("items", &self.items.len())
            .field("toasts", &self.notifications.len())
            .finish()
    }
}

impl FinanceTracker {
    /// Open a tracker over a storage backend, rehydrating whatever the
    /// backend holds. Unreadable or malformed state degrades to an empty
    /// collection; opening never fails.
    pub fn open(backend: Box<dyn StorageBackend>) -> Self {
        let items = StorageManager::load_items(&*backend);
        Self {
            items,
            item_service: ItemService::new(),
            notifications: NotificationCenter::new(),
            backend,
        }
    }

    /// A tracker with no persistence at all, for contexts where storage is
    /// unavailable (e.g. a server-side render pass) or unwanted.
    pub fn ephemeral() -> Self {
        Self::open(Box::new(NullStorage))
    }

    // ── Items ───────────────────────────────────────────────────────

    /// Create or update an item, discriminated by the presence of an id in
    /// the patch. Persists before returning and returns the full resulting
    /// item. Updating a missing id is the one operation that raises.
    pub fn upsert(&mut self, patch: ItemPatch) -> Result<FinanceItem, CoreError> {
        let item = self.item_service.upsert(&mut self.items, patch)?;
        self.persist();
        Ok(item)
    }

    /// Remove an item by id; absent ids are a no-op, not an error.
    /// Returns whether anything was removed. Persists afterward.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let removed = self.item_service.remove(&mut self.items, id);
        self.persist();
        removed
    }

    /// Get a single item by id.
    #[must_use]
    pub fn get_item(&self, id: Uuid) -> Option<&FinanceItem> {
        self.item_service.get_by_id(&self.items, id)
    }

    /// All items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[FinanceItem] {
        &self.items
    }

    /// Number of tracked items.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    // ── Persistence ─────────────────────────────────────────────────

    /// Re-read the collection from the backend, discarding in-memory state.
    pub fn reload(&mut self) {
        self.items = StorageManager::load_items(&*self.backend);
    }

    /// Write the whole collection to the backend. Storage problems degrade
    /// silently; they are logged, never raised.
    pub fn persist(&self) {
        StorageManager::persist_items(&*self.backend, &self.items);
    }

    // ── Calculator-driven updates ───────────────────────────────────

    /// Adjust an item's current amount by a percentage.
    ///
    /// Validates through the calculation engine; a valid result is written
    /// via `upsert` and announced with a success toast, an invalid one
    /// raises `CoreError::Validation` after surfacing an error toast.
    pub fn apply_percentage_to_item(
        &mut self,
        id: Uuid,
        percent: f64,
    ) -> Result<FinanceItem, CoreError> {
        let current = self.current_amount_of(id)?;
        let result = calculator::apply_percentage(current, percent, false);
        self.commit_result(id, current, result, OperationKind::Percentage)
    }

    /// Multiply an item's current amount.
    pub fn apply_multiplier_to_item(
        &mut self,
        id: Uuid,
        multiplier: f64,
    ) -> Result<FinanceItem, CoreError> {
        let current = self.current_amount_of(id)?;
        let result = calculator::apply_multiplier(current, multiplier, false);
        self.commit_result(id, current, result, OperationKind::Multiply)
    }

    /// Set an item's current amount to a percentage of its target,
    /// e.g. 50 for "half of the goal".
    pub fn apply_preset_to_item(
        &mut self,
        id: Uuid,
        percent: f64,
    ) -> Result<FinanceItem, CoreError> {
        let item = self
            .get_item(id)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;
        let current = item.current_amount;
        let result = calculator::apply_preset(item.target_amount, percent);
        self.commit_result(id, current, result, OperationKind::Preset)
    }

    /// Preview a calculation against an item without mutating anything.
    pub fn preview_for_item(
        &self,
        id: Uuid,
        result: &CalculationResult,
        kind: OperationKind,
    ) -> Result<PreviewText, CoreError> {
        let current = self.current_amount_of(id)?;
        Ok(calculator::preview_text(current, result, kind))
    }

    // ── Notifications ───────────────────────────────────────────────

    /// The shared notification queue. Clone the returned handle to hold on
    /// to it independently of the tracker.
    #[must_use]
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    // ── Internal ────────────────────────────────────────────────────

    fn current_amount_of(&self, id: Uuid) -> Result<f64, CoreError> {
        self.get_item(id)
            .map(|item| item.current_amount)
            .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))
    }

    fn commit_result(
        &mut self,
        id: Uuid,
        current: f64,
        result: CalculationResult,
        kind: OperationKind,
    ) -> Result<FinanceItem, CoreError> {
        if !result.is_valid {
            let message = result
                .error_message
                .unwrap_or_else(|| "Invalid calculation".to_string());
            self.notifications.error(message.clone(), None);
            return Err(CoreError::Validation(message));
        }

        let preview = calculator::preview_text(current, &result, kind);
        let item = self.upsert(ItemPatch::update(id).current_amount(result.new_value))?;
        self.notifications
            .success(format!("{}: {}", item.name, preview.calculation), None);
        Ok(item)
    }
}

impl Default for FinanceTracker {
    fn default() -> Self {
        Self::ephemeral()
    }
}
