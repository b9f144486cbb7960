//! Field-level validation primitives.
//!
//! Every check is a pure function over a borrowed value that appends to a
//! [`ValidationErrors`] accumulator, so a single pass reports all violations
//! of a candidate record at once and never mutates the candidate.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/* --------------------------------------------------------------------------
Types
-------------------------------------------------------------------------- */

/// Whether a candidate is a brand-new record or a partial update.
///
/// On `Create` every required field must be present. On `Update` absent
/// fields keep their stored value and are not checked; fields that are
/// present are held to the same rules as on create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    Create,
    Update,
}

/// Which end of an inclusive range a value fell outside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeBound {
    Min,
    Max,
}

impl RangeBound {
    fn describe(self) -> &'static str {
        match self {
            RangeBound::Min => "at least",
            RangeBound::Max => "at most",
        }
    }
}

/// A single field-level constraint violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldViolation {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be {} {limit}, got {value}", .bound.describe())]
    Range {
        field: &'static str,
        value: i64,
        bound: RangeBound,
        limit: i64,
    },

    #[error("{field} must be one of {}, got '{value}'", .allowed.join(", "))]
    Enum {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("{field} must be at most {max} characters, got {actual}")]
    Length {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error(
        "{field} must have at most {max_digits} digits with {decimal_places} after the decimal point, got {value}"
    )]
    Precision {
        field: &'static str,
        value: String,
        max_digits: u32,
        decimal_places: u32,
    },
}

impl FieldViolation {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            FieldViolation::Required { field }
            | FieldViolation::Range { field, .. }
            | FieldViolation::Enum { field, .. }
            | FieldViolation::Length { field, .. }
            | FieldViolation::Precision { field, .. } => field,
        }
    }
}

/// Ordered collection of violations found on one candidate record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldViolation>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: FieldViolation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    /// `Ok(())` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/* --------------------------------------------------------------------------
Checks
-------------------------------------------------------------------------- */

/// A required text field must be present (on create) and non-blank.
///
/// Returns the value as given, untrimmed, when it is usable for further
/// checks, so length limits apply to what is stored.
pub fn check_required<'a>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<&'a str>,
    mode: ValidationMode,
) -> Option<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        Some(_) => {
            errors.push(FieldViolation::Required { field });
            None
        }
        None => {
            if mode == ValidationMode::Create {
                errors.push(FieldViolation::Required { field });
            }
            None
        }
    }
}

/// A required non-text field must be present on create.
pub fn check_present<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<T>,
    mode: ValidationMode,
) {
    if value.is_none() && mode == ValidationMode::Create {
        errors.push(FieldViolation::Required { field });
    }
}

/// Inclusive range check naming the bound that was crossed.
pub fn check_range(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: i64,
    min: i64,
    max: i64,
) {
    if value < min {
        errors.push(FieldViolation::Range {
            field,
            value,
            bound: RangeBound::Min,
            limit: min,
        });
    } else if value > max {
        errors.push(FieldViolation::Range {
            field,
            value,
            bound: RangeBound::Max,
            limit: max,
        });
    }
}

/// Case-sensitive membership in a fixed set of choices.
pub fn check_choice(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    allowed: &'static [&'static str],
) {
    if !allowed.contains(&value) {
        errors.push(FieldViolation::Enum {
            field,
            value: value.to_string(),
            allowed,
        });
    }
}

/// Maximum length in characters (not bytes).
pub fn check_max_length(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    max: usize,
) {
    let actual = value.chars().count();
    if actual > max {
        errors.push(FieldViolation::Length { field, max, actual });
    }
}

/// Fixed-precision decimal check, equivalent to a `NUMERIC(max_digits, decimal_places)` column.
///
/// Trailing fractional zeros are ignored, so `12.500` fits two decimal places.
pub fn check_decimal_precision(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &Decimal,
    max_digits: u32,
    decimal_places: u32,
) {
    let normalized = value.normalize();
    let decimals = normalized.scale();
    let digits = count_digits(normalized.mantissa().unsigned_abs()).max(decimals);
    let whole_digits = digits - decimals;

    if decimals > decimal_places || whole_digits > max_digits - decimal_places {
        errors.push(FieldViolation::Precision {
            field,
            value: value.to_string(),
            max_digits,
            decimal_places,
        });
    }
}

fn count_digits(mut n: u128) -> u32 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
