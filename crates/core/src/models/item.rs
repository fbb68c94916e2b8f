use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::ids;

/// The category of a tracked finance item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinanceType {
    /// Money the user borrowed and still owes
    LoanSelf,
    /// Money the user lent to someone else
    LoanOther,
    /// A savings goal
    Savings,
}

impl std::fmt::Display for FinanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinanceType::LoanSelf => write!(f, "Loan (owed)"),
            FinanceType::LoanOther => write!(f, "Loan (given)"),
            FinanceType::Savings => write!(f, "Savings"),
        }
    }
}

/// A single tracked loan or savings goal.
///
/// The serialized layout matches the persisted store: camelCase keys, the
/// category under `type`, and timestamps as epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceItem {
    /// Unique identifier, immutable for the lifetime of the item
    pub id: Uuid,

    /// Item category
    #[serde(rename = "type")]
    pub item_type: FinanceType,

    /// Display label
    pub name: String,

    /// Goal or principal amount
    #[serde(default, deserialize_with = "de_amount")]
    pub target_amount: f64,

    /// Amount paid off / deposited so far
    #[serde(default, deserialize_with = "de_amount")]
    pub current_amount: f64,

    /// Set once at creation, never changes
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    /// Advances on every mutation
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub updated_at: DateTime<Utc>,
}

/// Current time truncated to millisecond precision. Timestamps persist as
/// epoch milliseconds, so anything finer would not survive a round-trip.
pub(crate) fn now_ms() -> DateTime<Utc> {
    let now = Utc::now();
    match DateTime::from_timestamp_millis(now.timestamp_millis()) {
        Some(truncated) => truncated,
        None => now,
    }
}

impl FinanceItem {
    /// Create a fresh item with a generated id and both timestamps set to now.
    pub fn new(item_type: FinanceType, name: impl Into<String>, target_amount: f64) -> Self {
        let now = now_ms();
        Self {
            id: ids::new_item_id(),
            item_type,
            name: name.into(),
            target_amount: safe_number(target_amount),
            current_amount: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Re-apply the safe-number coercion to the amount fields.
    /// Called on every record loaded from storage.
    pub fn sanitize(&mut self) {
        self.target_amount = safe_number(self.target_amount);
        self.current_amount = safe_number(self.current_amount);
    }
}

/// Coerce an arbitrary float to a finite one, substituting 0 on failure.
/// Guards against corrupted or hand-edited storage.
#[must_use]
pub fn safe_number(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Lenient amount deserializer: accepts a JSON number, a numeric string, or
/// null, and coerces anything else (or a non-finite value) to 0.
fn de_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    Ok(safe_number(parsed))
}

/// Input to the store's upsert operation. Presence of `id` discriminates
/// update from create; every other field is an optional override.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub id: Option<Uuid>,
    pub item_type: Option<FinanceType>,
    pub name: Option<String>,
    pub target_amount: Option<f64>,
    pub current_amount: Option<f64>,
}

impl ItemPatch {
    /// A patch with no id: upsert will create a new item.
    #[must_use]
    pub fn create() -> Self {
        Self::default()
    }

    /// A patch targeting an existing item: upsert will merge into it.
    #[must_use]
    pub fn update(id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn item_type(mut self, item_type: FinanceType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn target_amount(mut self, amount: f64) -> Self {
        self.target_amount = Some(amount);
        self
    }

    #[must_use]
    pub fn current_amount(mut self, amount: f64) -> Self {
        self.current_amount = Some(amount);
        self
    }
}
