//! Location listing query parameters and the paged envelope.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Location, LocationPage, Pager, SortDirection};
use crate::error::GalleryError;

/// Query parameters for `GET /locations`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Case-insensitive title substring.
    pub title: Option<String>,
    /// `asc` or `desc`; reverses the default newest-first order.
    pub order: Option<String>,
}

/// Query parameters for `GET /locations/title`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderParams {
    /// `asc` or `desc`; reverses the default A to Z order.
    pub order: Option<String>,
}

/// Query parameters for the paged listings.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PagedParams {
    /// Requested 1-based page. Non-numeric or missing means page 1.
    pub page: Option<String>,
    /// Case-insensitive title substring.
    pub title: Option<String>,
}

impl PagedParams {
    /// Requested page number, read the way the frontend writes it.
    #[must_use]
    pub fn page_number(&self) -> i64 {
        page_number(self.page.as_deref())
    }
}

/// Response body for the paged listings.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PagedLocationsResponse {
    /// Page descriptor.
    pub pager: Pager,
    /// Locations on the current page.
    pub page_of_items: Vec<Location>,
}

impl From<LocationPage> for PagedLocationsResponse {
    fn from(page: LocationPage) -> Self {
        Self {
            pager: page.pager,
            page_of_items: page.items,
        }
    }
}

/// Reads a page number with `parseInt(raw) || 1` semantics: the leading
/// integer prefix counts, anything without one (or zero) is page 1.
/// Negative values pass through and are snapped by the pager.
#[must_use]
pub fn page_number(raw: Option<&str>) -> i64 {
    let Some(raw) = raw else {
        return 1;
    };
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let digits = rest.get(..end).unwrap_or_default();
    if digits.is_empty() {
        return 1;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    match (negative, magnitude) {
        (_, 0) => 1,
        (true, m) => -m,
        (false, m) => m,
    }
}

/// Parses an optional `order` parameter. Blank means "use the default".
///
/// # Errors
///
/// Returns [`GalleryError::InvalidRequest`] for anything other than `asc`
/// or `desc`.
pub fn sort_direction(raw: Option<&str>) -> Result<Option<SortDirection>, GalleryError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<SortDirection>()
            .map(Some)
            .map_err(|e| GalleryError::InvalidRequest(e.to_string())),
    }
}
