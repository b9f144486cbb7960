//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use std::fmt::Display;

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A record serialized together with its canonical display string.
///
/// The record's own fields are flattened, so `{"id": 1, "name": "Kia"}`
/// becomes `{"id": 1, "name": "Kia", "display": "Kia"}`.
#[derive(Debug, Serialize)]
pub struct Displayed<T: Serialize> {
    #[serde(flatten)]
    pub record: T,
    pub display: String,
}

impl<T: Serialize + Display> Displayed<T> {
    pub fn new(record: T) -> Self {
        let display = record.to_string();
        Self { record, display }
    }

    /// Wrap every record of a list.
    pub fn all(records: Vec<T>) -> Vec<Self> {
        records.into_iter().map(Self::new).collect()
    }
}
