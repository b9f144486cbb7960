//! Query parameter types for the dealer pass-through endpoints.
//!
//! Entity list filters live next to their DTOs in `dealership_db::models`.

use serde::Deserialize;

/// `?state=` filter for the dealer list.
#[derive(Debug, Default, Deserialize)]
pub struct DealerListParams {
    pub state: Option<String>,
}

/// `?text=` input for the sentiment endpoint.
#[derive(Debug, Deserialize)]
pub struct SentimentParams {
    pub text: String,
}
