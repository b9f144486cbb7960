//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches
//!
//! Nullable columns use `Option<Option<T>>` in update DTOs: the outer
//! `None` keeps the stored value, `Some(None)` clears it.

use serde::{Deserialize, Deserializer};

pub mod car_make;
pub mod car_model;

/// Deserialize an explicit JSON `null` as `Some(None)`.
///
/// Pair with `#[serde(default)]` so an absent key stays `None`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
