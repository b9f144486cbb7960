//! Authentication primitives.
//!
//! - [`jwt`] -- validation (and, for tooling and tests, issuance) of the
//!   HS256 access tokens minted by the external identity provider.

pub mod jwt;
