//! The calculation engine: pure functions for previewing and validating
//! amount adjustments. No shared state, safe to call from any context.

use crate::models::calculation::{CalculationResult, OperationKind, PreviewText, ValidatedInput};

/// Apply a percentage change to a value.
///
/// `change = current * percent / 100`, `new_value = current + change`.
/// When `allow_negative` is false a below-zero result is flagged invalid
/// and the returned value is clamped to 0; the clamped value is still
/// usable for display alongside the error.
#[must_use]
pub fn apply_percentage(current: f64, percent: f64, allow_negative: bool) -> CalculationResult {
    let change = current * (percent / 100.0);
    let new_value = current + change;
    let is_valid = allow_negative || new_value >= 0.0;

    CalculationResult {
        new_value: if allow_negative { new_value } else { new_value.max(0.0) },
        change,
        change_percent: percent,
        is_valid,
        error_message: (!is_valid).then(|| "Result cannot be negative".to_string()),
    }
}

/// Multiply a value.
///
/// `change_percent` is the relative change; when `current` is 0 it is
/// reported as 0 rather than a non-finite quotient. Clamping and validity
/// behave as in [`apply_percentage`].
#[must_use]
pub fn apply_multiplier(current: f64, multiplier: f64, allow_negative: bool) -> CalculationResult {
    let new_value = current * multiplier;
    let change = new_value - current;
    let change_percent = if current == 0.0 {
        0.0
    } else {
        change / current * 100.0
    };
    let is_valid = allow_negative || new_value >= 0.0;

    CalculationResult {
        new_value: if allow_negative { new_value } else { new_value.max(0.0) },
        change,
        change_percent,
        is_valid,
        error_message: (!is_valid).then(|| "Result cannot be negative".to_string()),
    }
}

/// Compute a preset value such as "50% of target".
///
/// Always valid. `change` is reported as 0: this sets a value rather than
/// deltas it.
#[must_use]
pub fn apply_preset(base: f64, percent: f64) -> CalculationResult {
    CalculationResult {
        new_value: base * (percent / 100.0),
        change: 0.0,
        change_percent: 0.0,
        is_valid: true,
        error_message: None,
    }
}

/// Format an amount as US-dollar currency: two decimal places, comma
/// thousands separators, leading `-` for negatives. Fixed formatting
/// regardless of deployment locale.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let body = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match body.split_once('.') {
        Some(parts) => parts,
        None => (body.as_str(), "00"),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (count, ch) in int_part.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}

/// Render a short "before → after" preview of a calculation.
///
/// Percentage and multiply previews carry a signed delta description with
/// the percent to one decimal place; presets describe setting a value
/// instead of changing one.
#[must_use]
pub fn preview_text(
    current_value: f64,
    result: &CalculationResult,
    kind: OperationKind,
) -> PreviewText {
    let current = format_currency(current_value);
    let new_val = format_currency(result.new_value);
    let change_amount = format_currency(result.change.abs());
    let sign = if result.change >= 0.0 { '+' } else { '-' };

    match kind {
        OperationKind::Percentage => {
            let description = if result.change != 0.0 {
                let pct_sign = if result.change_percent >= 0.0 { "+" } else { "" };
                format!(
                    "{sign}{change_amount} ({pct_sign}{:.1}%)",
                    result.change_percent
                )
            } else {
                "No change".to_string()
            };
            PreviewText {
                calculation: format!("{current} → {new_val}"),
                description,
            }
        }
        OperationKind::Multiply => {
            let description = if result.change != 0.0 {
                format!("{sign}{change_amount} ({:.1}% change)", result.change_percent)
            } else {
                "No change".to_string()
            };
            PreviewText {
                calculation: format!("{current} → {new_val}"),
                description,
            }
        }
        OperationKind::Preset => PreviewText {
            calculation: new_val,
            description: "Set to this amount".to_string(),
        },
    }
}

/// Parse a raw percentage input.
///
/// On failure the returned value defaults to 0 so the caller can pre-fill
/// UI state. `None` models an absent input.
#[must_use]
pub fn validate_percentage_input(raw: Option<&str>, allow_negative: bool) -> ValidatedInput {
    parse_input(raw, "Please enter a percentage", 0.0, |value| {
        if !allow_negative && value < 0.0 {
            Some("Percentage cannot be negative")
        } else {
            None
        }
    })
}

/// Parse a raw multiplier input. Negative multipliers are always rejected;
/// the fallback value is 1 (the identity multiplier).
#[must_use]
pub fn validate_multiplier_input(raw: Option<&str>) -> ValidatedInput {
    parse_input(raw, "Please enter a multiplier", 1.0, |value| {
        if value < 0.0 {
            Some("Multiplier cannot be negative")
        } else {
            None
        }
    })
}

/// Shared parse path for the two input validators. `check` inspects the
/// parsed value and returns a rejection message, if any.
fn parse_input(
    raw: Option<&str>,
    empty_message: &str,
    fallback: f64,
    check: impl Fn(f64) -> Option<&'static str>,
) -> ValidatedInput {
    let trimmed = match raw {
        Some(raw) if !raw.trim().is_empty() => raw.trim(),
        _ => return ValidatedInput::fail(empty_message, fallback),
    };

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => match check(value) {
            Some(message) => ValidatedInput::fail(message, fallback),
            None => ValidatedInput::ok(value),
        },
        _ => ValidatedInput::fail("Please enter a valid number", fallback),
    }
}
