//! Location read handlers: listings, paged listings, and lookup by id.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    ListParams, OrderParams, PagedLocationsResponse, PagedParams, sort_direction,
};
use crate::api::extract::QueryParams;
use crate::app_state::AppState;
use crate::domain::{Location, LocationId};
use crate::error::{ErrorResponse, GalleryError};
use crate::service::PageLength;

/// `GET /api/locations`: All locations, newest first.
///
/// # Errors
///
/// Returns [`GalleryError`] on an invalid `order` or store failure.
#[utoipa::path(
    get,
    path = "/api/locations",
    tag = "Locations",
    summary = "List locations",
    description = "Returns every location, newest first, optionally filtered by a case-insensitive title substring.",
    params(ListParams),
    responses(
        (status = 200, description = "Location list", body = Vec<Location>),
        (status = 400, description = "Invalid order", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_locations(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<impl IntoResponse, GalleryError> {
    let direction = sort_direction(params.order.as_deref())?;
    let locations = state
        .location_service
        .list(params.title, direction)
        .await?;
    Ok(Json(locations))
}

/// `GET /api/locations/paged`: Grid page of locations.
///
/// # Errors
///
/// Returns [`GalleryError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/locations/paged",
    tag = "Locations",
    summary = "Page of locations",
    description = "Returns one page of the newest-first listing together with its pager. Uses the standard page size (12 by default).",
    params(PagedParams),
    responses(
        (status = 200, description = "Paged locations", body = PagedLocationsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_locations_paged(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PagedParams>,
) -> Result<impl IntoResponse, GalleryError> {
    paged(&state, params, PageLength::Standard).await
}

/// `GET /api/locations/paged-long`: Long page of locations.
///
/// # Errors
///
/// Returns [`GalleryError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/locations/paged-long",
    tag = "Locations",
    summary = "Long page of locations",
    description = "Same as `/api/locations/paged` with the long page size (50 by default).",
    params(PagedParams),
    responses(
        (status = 200, description = "Paged locations", body = PagedLocationsResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_locations_paged_long(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<PagedParams>,
) -> Result<impl IntoResponse, GalleryError> {
    paged(&state, params, PageLength::Long).await
}

async fn paged(
    state: &AppState,
    params: PagedParams,
    length: PageLength,
) -> Result<Json<PagedLocationsResponse>, GalleryError> {
    let page = params.page_number();
    let result = state
        .location_service
        .list_paged(params.title, page, length)
        .await?;
    Ok(Json(result.into()))
}

/// `GET /api/locations/title`: All locations A to Z.
///
/// # Errors
///
/// Returns [`GalleryError`] on an invalid `order` or store failure.
#[utoipa::path(
    get,
    path = "/api/locations/title",
    tag = "Locations",
    summary = "List locations alphabetically",
    description = "Returns every location sorted by title, A to Z unless `order=desc`.",
    params(OrderParams),
    responses(
        (status = 200, description = "Location list", body = Vec<Location>),
        (status = 400, description = "Invalid order", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_locations_by_title(
    State(state): State<AppState>,
    QueryParams(params): QueryParams<OrderParams>,
) -> Result<impl IntoResponse, GalleryError> {
    let direction = sort_direction(params.order.as_deref())?;
    let locations = state.location_service.list_alphabetical(direction).await?;
    Ok(Json(locations))
}

/// `GET /api/locations/markedImportant`: Important locations, newest first.
///
/// # Errors
///
/// Returns [`GalleryError`] on store failure.
#[utoipa::path(
    get,
    path = "/api/locations/markedImportant",
    tag = "Locations",
    summary = "List important locations",
    description = "Returns locations with `markedImportant` set, newest first.",
    responses(
        (status = 200, description = "Location list", body = Vec<Location>),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_marked_important(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GalleryError> {
    let locations = state.location_service.list_marked_important().await?;
    Ok(Json(locations))
}

/// `GET /api/locations/{id}`: One location.
///
/// # Errors
///
/// Returns [`GalleryError::InvalidRequest`] for a malformed id and
/// [`GalleryError::LocationNotFound`] if no location has it.
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    tag = "Locations",
    summary = "Get location",
    description = "Returns a single location by id.",
    params(
        ("id" = i64, Path, description = "Location id"),
    ),
    responses(
        (status = 200, description = "Location", body = Location),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Location not found", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, GalleryError> {
    let id = raw_id
        .parse::<LocationId>()
        .map_err(|e| GalleryError::InvalidRequest(e.to_string()))?;
    let location = state.location_service.get(id).await?;
    Ok(Json(location))
}

/// Location routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/locations", get(list_locations))
        .route("/locations/paged", get(list_locations_paged))
        .route("/locations/paged-long", get(list_locations_paged_long))
        .route("/locations/title", get(list_locations_by_title))
        .route("/locations/markedImportant", get(list_marked_important))
        .route("/locations/{id}", get(get_location))
}
