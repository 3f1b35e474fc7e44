//! Domain layer: the location entity, its identifier, listing queries,
//! and the pager.
//!
//! Nothing in here performs I/O. The persistence layer consumes
//! [`LocationQuery`] and produces [`Location`] rows; the service layer
//! combines them with [`Pager`] to build paged listings.

pub mod location;
pub mod location_id;
pub mod pager;
pub mod query;

pub use location::{Location, LocationPage};
pub use location_id::{LocationId, ParseLocationIdError};
pub use pager::{DEFAULT_MAX_PAGES, Pager, PagerError};
pub use query::{LocationQuery, ParseSortDirectionError, SortDirection, SortKey};
