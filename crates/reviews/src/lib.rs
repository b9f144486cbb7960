//! Outbound REST client for the external dealer, review and sentiment
//! services.

pub mod api;

pub use api::{DealerApi, DealerApiError};
