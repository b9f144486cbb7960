//! Car model constants, field rules, and display formatting.
//!
//! A car model belongs to exactly one car make and is sold by an external
//! dealer identified only by `dealer_id`.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::DbId;
use crate::validation::{
    check_choice, check_decimal_precision, check_max_length, check_present, check_range,
    check_required, ValidationErrors, ValidationMode,
};

/* --------------------------------------------------------------------------
Constants
-------------------------------------------------------------------------- */

pub const CAR_TYPE_SEDAN: &str = "SEDAN";
pub const CAR_TYPE_SUV: &str = "SUV";
pub const CAR_TYPE_WAGON: &str = "WAGON";
pub const CAR_TYPE_COUPE: &str = "COUPE";
pub const CAR_TYPE_HATCHBACK: &str = "HATCHBACK";
pub const CAR_TYPE_CONVERTIBLE: &str = "CONVERTIBLE";
pub const CAR_TYPE_TRUCK: &str = "TRUCK";

/// All valid car type codes, in admin display order.
pub const CAR_TYPES: &[&str] = &[
    CAR_TYPE_SEDAN,
    CAR_TYPE_SUV,
    CAR_TYPE_WAGON,
    CAR_TYPE_COUPE,
    CAR_TYPE_HATCHBACK,
    CAR_TYPE_CONVERTIBLE,
    CAR_TYPE_TRUCK,
];

/// Car type used when none is given on create.
pub const DEFAULT_CAR_TYPE: &str = CAR_TYPE_SUV;

/// Oldest accepted model year (inclusive).
pub const MIN_YEAR: i32 = 2015;

/// Newest accepted model year (inclusive).
pub const MAX_YEAR: i32 = 2024;

/// Model year used when none is given on create.
pub const DEFAULT_YEAR: i32 = 2023;

/// Maximum length of a car model name.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a car model color.
pub const MAX_COLOR_LENGTH: usize = 50;

/// Total significant digits allowed in a price.
pub const PRICE_MAX_DIGITS: u32 = 10;

/// Digits allowed after the decimal point in a price.
pub const PRICE_DECIMAL_PLACES: u32 = 2;

/// Human-readable label for a car type code, as shown in admin forms.
pub fn car_type_label(code: &str) -> Option<&'static str> {
    match code {
        CAR_TYPE_SEDAN => Some("Sedan"),
        CAR_TYPE_SUV => Some("SUV"),
        CAR_TYPE_WAGON => Some("Wagon"),
        CAR_TYPE_COUPE => Some("Coupe"),
        CAR_TYPE_HATCHBACK => Some("Hatchback"),
        CAR_TYPE_CONVERTIBLE => Some("Convertible"),
        CAR_TYPE_TRUCK => Some("Truck"),
        _ => None,
    }
}

/// One `(code, label)` pair of the car type enumeration.
#[derive(Debug, Clone, Serialize)]
pub struct CarTypeChoice {
    pub value: &'static str,
    pub label: &'static str,
}

/// The full car type enumeration with labels, in display order.
pub fn car_type_choices() -> Vec<CarTypeChoice> {
    CAR_TYPES
        .iter()
        .map(|&value| CarTypeChoice {
            value,
            label: car_type_label(value).unwrap_or(value),
        })
        .collect()
}

/* --------------------------------------------------------------------------
Validation
-------------------------------------------------------------------------- */

/// Borrowed view of a candidate car model (full create or partial update).
#[derive(Debug, Clone, Copy, Default)]
pub struct CarModelFields<'a> {
    pub car_make_id: Option<DbId>,
    pub dealer_id: Option<i32>,
    pub name: Option<&'a str>,
    pub car_type: Option<&'a str>,
    pub year: Option<i32>,
    pub color: Option<&'a str>,
    pub price: Option<&'a Decimal>,
}

/// Validate a candidate car model.
///
/// `car_make_id` is only checked for presence here; whether the referenced
/// make exists is the store's concern.
pub fn validate_car_model(
    fields: &CarModelFields<'_>,
    mode: ValidationMode,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_present(&mut errors, "car_make", fields.car_make_id, mode);
    check_present(&mut errors, "dealer_id", fields.dealer_id, mode);
    if let Some(name) = check_required(&mut errors, "name", fields.name, mode) {
        check_max_length(&mut errors, "name", name, MAX_NAME_LENGTH);
    }
    if let Some(car_type) = fields.car_type {
        check_choice(&mut errors, "type", car_type, CAR_TYPES);
    }
    if let Some(year) = fields.year {
        check_range(
            &mut errors,
            "year",
            i64::from(year),
            i64::from(MIN_YEAR),
            i64::from(MAX_YEAR),
        );
    }
    if let Some(color) = fields.color {
        check_max_length(&mut errors, "color", color, MAX_COLOR_LENGTH);
    }
    if let Some(price) = fields.price {
        check_decimal_precision(
            &mut errors,
            "price",
            price,
            PRICE_MAX_DIGITS,
            PRICE_DECIMAL_PLACES,
        );
    }

    errors.into_result()
}

/* --------------------------------------------------------------------------
Display
-------------------------------------------------------------------------- */

/// Canonical display string of a car model: `"<make name> <model name>"`.
pub fn display_name(car_make_name: &str, model_name: &str) -> String {
    format!("{car_make_name} {model_name}")
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
