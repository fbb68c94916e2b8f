use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::item::{now_ms, safe_number, FinanceItem, FinanceType, ItemPatch};

/// Name given to items created without one.
pub const DEFAULT_ITEM_NAME: &str = "Untitled";

/// Create/merge/remove logic for the item collection.
///
/// Pure business logic, no I/O: operates on a collection the caller owns.
/// Insertion order is preserved; new items are appended at the end.
pub struct ItemService;

impl ItemService {
    pub fn new() -> Self {
        Self
    }

    /// Create or update an item, discriminated by the presence of `patch.id`.
    ///
    /// Without an id a new item is created with defaulted fields and both
    /// timestamps set to now. With an id the named item is merged in place:
    /// patch fields override, `id` and `created_at` are preserved, and
    /// `updated_at` advances. A missing id is a hard error and leaves the
    /// collection untouched.
    pub fn upsert(
        &self,
        items: &mut Vec<FinanceItem>,
        patch: ItemPatch,
    ) -> Result<FinanceItem, CoreError> {
        match patch.id {
            None => {
                let mut item = FinanceItem::new(
                    patch.item_type.unwrap_or(FinanceType::Savings),
                    patch.name.unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string()),
                    patch.target_amount.unwrap_or(0.0),
                );
                item.current_amount = safe_number(patch.current_amount.unwrap_or(0.0));
                items.push(item.clone());
                Ok(item)
            }
            Some(id) => {
                let existing = items
                    .iter_mut()
                    .find(|item| item.id == id)
                    .ok_or_else(|| CoreError::ItemNotFound(id.to_string()))?;

                if let Some(item_type) = patch.item_type {
                    existing.item_type = item_type;
                }
                if let Some(name) = patch.name {
                    existing.name = name;
                }
                if let Some(amount) = patch.target_amount {
                    existing.target_amount = safe_number(amount);
                }
                if let Some(amount) = patch.current_amount {
                    existing.current_amount = safe_number(amount);
                }
                existing.updated_at = now_ms();

                Ok(existing.clone())
            }
        }
    }

    /// Remove the item with the given id. Returns whether anything was
    /// removed; an absent id is a no-op, not an error.
    pub fn remove(&self, items: &mut Vec<FinanceItem>, id: Uuid) -> bool {
        let before = items.len();
        items.retain(|item| item.id != id);
        items.len() != before
    }

    /// Find an item by id. Pure read.
    #[must_use]
    pub fn get_by_id<'a>(&self, items: &'a [FinanceItem], id: Uuid) -> Option<&'a FinanceItem> {
        items.iter().find(|item| item.id == id)
    }
}

impl Default for ItemService {
    fn default() -> Self {
        Self::new()
    }
}
