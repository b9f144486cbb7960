//! Domain logic for the dealership inventory backend.
//!
//! No database or HTTP dependencies live here: field rules, display
//! formatting, search helpers, and the review gateway are pure functions
//! over borrowed values or over the [`dealer::DealerService`] trait.

pub mod car_make;
pub mod car_model;
pub mod dealer;
pub mod error;
pub mod review;
pub mod roles;
pub mod search;
pub mod types;
pub mod validation;
