//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod car_make_repo;
pub mod car_model_repo;

pub use car_make_repo::CarMakeRepo;
pub use car_model_repo::CarModelRepo;
