//! Service layer: business logic orchestration.
//!
//! [`LocationService`] turns endpoint intents (newest first, A to Z,
//! important only, paged) into store queries and pager computations.

pub mod location_service;

pub use location_service::{LocationService, PageLength};
