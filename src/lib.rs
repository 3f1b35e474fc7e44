//! # location-gallery
//!
//! REST backend for a personal geotagged-location gallery.
//!
//! This crate serves read-only "location" records (title, description,
//! coordinates, media links, importance flag) as JSON lists, paged
//! listings, and single-record lookups. Paged listings carry a [`Pager`]
//! describing slice bounds and a sliding window of page numbers.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── LocationService (service/)
//!     ├── Pager, LocationQuery (domain/)
//!     │
//!     └── LocationStore (persistence/)
//!           ├── PostgreSQL (sqlx)
//!           └── In-memory
//! ```
//!
//! [`Pager`]: domain::Pager

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod service;
