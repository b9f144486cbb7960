//! Car make entity model and DTOs.

use std::fmt;

use dealership_core::car_make::CarMakeFields;
use dealership_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `car_makes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CarMake {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A car make renders as its name.
impl fmt::Display for CarMake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// DTO for creating a new car make.
///
/// Required fields are `Option` so a missing value is reported as a field
/// violation rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCarMake {
    pub name: Option<String>,
    pub description: Option<String>,
    pub country: Option<String>,
    pub founded_year: Option<i32>,
}

impl CreateCarMake {
    pub fn fields(&self) -> CarMakeFields<'_> {
        CarMakeFields {
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            country: self.country.as_deref(),
            founded_year: self.founded_year,
        }
    }
}

/// DTO for updating an existing car make. All fields are optional.
///
/// `country` and `founded_year` can be cleared with an explicit `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCarMake {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub country: Option<Option<String>>,
    #[serde(default, deserialize_with = "super::nullable")]
    pub founded_year: Option<Option<i32>>,
}

impl UpdateCarMake {
    pub fn fields(&self) -> CarMakeFields<'_> {
        CarMakeFields {
            name: self.name.as_deref(),
            description: self.description.as_deref(),
            country: self.country.as_ref().and_then(|c| c.as_deref()),
            founded_year: self.founded_year.flatten(),
        }
    }
}

/// Query parameters for listing car makes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarMakeFilter {
    /// Case-insensitive substring matched against `name`.
    #[serde(rename = "q")]
    pub search: Option<String>,
}
