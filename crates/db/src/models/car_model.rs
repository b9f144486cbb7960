//! Car model entity model and DTOs.

use std::fmt;

use dealership_core::car_model::{self, CarModelFields};
use dealership_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `car_models` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarModel {
    pub id: DbId,
    pub car_make_id: DbId,
    pub dealer_id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub car_type: String,
    pub year: i32,
    pub color: Option<String>,
    pub price: Option<Decimal>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A car model joined with the name of its owning make.
///
/// Every read path returns this shape so the display string is always
/// available without a second query.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarModelWithMake {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub model: CarModel,
    pub car_make_name: String,
}

/// Renders as `"<make name> <model name>"`.
impl fmt::Display for CarModelWithMake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&car_model::display_name(
            &self.car_make_name,
            &self.model.name,
        ))
    }
}

/// DTO for creating a new car model.
///
/// `type` and `year` default to `SUV` and `2023` when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCarModel {
    pub car_make_id: Option<DbId>,
    pub dealer_id: Option<i32>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub car_type: Option<String>,
    pub year: Option<i32>,
    pub color: Option<String>,
    pub price: Option<Decimal>,
}

impl CreateCarModel {
    pub fn fields(&self) -> CarModelFields<'_> {
        CarModelFields {
            car_make_id: self.car_make_id,
            dealer_id: self.dealer_id,
            name: self.name.as_deref(),
            car_type: self.car_type.as_deref(),
            year: self.year,
            color: self.color.as_deref(),
            price: self.price.as_ref(),
        }
    }
}

/// DTO for updating an existing car model. All fields are optional.
///
/// `color` and `price` can be cleared with an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCarModel {
    pub car_make_id: Option<DbId>,
    pub dealer_id: Option<i32>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub car_type: Option<String>,
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub color: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub price: Option<Option<Decimal>>,
}

impl UpdateCarModel {
    pub fn fields(&self) -> CarModelFields<'_> {
        CarModelFields {
            car_make_id: self.car_make_id,
            dealer_id: self.dealer_id,
            name: self.name.as_deref(),
            car_type: self.car_type.as_deref(),
            year: self.year,
            color: self.color.as_ref().and_then(|c| c.as_deref()),
            price: self.price.as_ref().and_then(Option::as_ref),
        }
    }
}

/// Query parameters for listing car models.
///
/// `type`, `year` and `car_make_id` are exact matches; `q` is a
/// case-insensitive substring matched against the model name and the owning
/// make's name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarModelFilter {
    #[serde(rename = "type")]
    pub car_type: Option<String>,
    pub year: Option<i32>,
    pub car_make_id: Option<DbId>,
    #[serde(rename = "q")]
    pub search: Option<String>,
}

/// One entry of the public `/cars` listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarSummary {
    #[serde(rename = "CarModel")]
    pub car_model: String,
    #[serde(rename = "CarMake")]
    pub car_make: String,
}
