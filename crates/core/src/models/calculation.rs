/// Which calculator produced a result. Drives preview rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// Add/subtract a percentage of the current value
    Percentage,
    /// Multiply the current value
    Multiply,
    /// Set to a percentage of a base value (e.g. "50% of target")
    Preset,
}

/// Outcome of a single calculator invocation. Transient: produced and
/// consumed per invocation, never persisted.
///
/// `is_valid` and `new_value` are deliberately independent signals: an
/// out-of-range result is flagged invalid but still carries a clamped,
/// displayable value.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// The computed value, clamped to 0 unless negatives were allowed
    pub new_value: f64,

    /// Signed delta from the input value (0 for presets)
    pub change: f64,

    /// The delta as a percentage of the input value (0 for presets)
    pub change_percent: f64,

    /// Whether the result is acceptable as entered
    pub is_valid: bool,

    /// Human-readable reason when `is_valid` is false
    pub error_message: Option<String>,
}

/// A rendered "before → after" preview of a calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewText {
    /// The calculation itself, e.g. `"$100.00 → $110.00"`
    pub calculation: String,

    /// The delta description, e.g. `"+$10.00 (+10.0%)"`
    pub description: String,
}

/// Outcome of parsing a raw percentage/multiplier input.
///
/// Carries a usable `numeric_value` even on failure so callers can pre-fill
/// UI state.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub is_valid: bool,
    pub error_message: Option<String>,
    pub numeric_value: f64,
}

impl ValidatedInput {
    pub(crate) fn ok(numeric_value: f64) -> Self {
        Self {
            is_valid: true,
            error_message: None,
            numeric_value,
        }
    }

    pub(crate) fn fail(message: impl Into<String>, fallback_value: f64) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
            numeric_value: fallback_value,
        }
    }
}
