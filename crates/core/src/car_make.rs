//! Car make field rules.
//!
//! A car make is a vehicle manufacturer. `name` and `description` are
//! required; `country` and `founded_year` are optional. Name uniqueness is
//! deliberately not enforced.

use crate::validation::{check_max_length, check_required, ValidationErrors, ValidationMode};

/// Maximum length of a car make name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a car make's country of origin.
pub const MAX_COUNTRY_LENGTH: usize = 100;

/// Borrowed view of a candidate car make (full create or partial update).
#[derive(Debug, Clone, Copy, Default)]
pub struct CarMakeFields<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub country: Option<&'a str>,
    pub founded_year: Option<i32>,
}

/// Validate a candidate car make.
///
/// `founded_year` has no enforced range.
pub fn validate_car_make(
    fields: &CarMakeFields<'_>,
    mode: ValidationMode,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    if let Some(name) = check_required(&mut errors, "name", fields.name, mode) {
        check_max_length(&mut errors, "name", name, MAX_NAME_LENGTH);
    }
    check_required(&mut errors, "description", fields.description, mode);
    if let Some(country) = fields.country {
        check_max_length(&mut errors, "country", country, MAX_COUNTRY_LENGTH);
    }

    errors.into_result()
}
