//! Data Transfer Objects for REST request/response serialization.
//!
//! Response bodies use camelCase keys; the gallery frontend reads them
//! as-is.

pub mod location_dto;

pub use location_dto::*;
