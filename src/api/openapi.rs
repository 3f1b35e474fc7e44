//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use crate::api::dto::PagedLocationsResponse;
use crate::api::handlers::{locations, system};
use crate::domain::{Location, Pager};
use crate::error::ErrorResponse;

/// OpenAPI description of every endpoint.
#[derive(Debug, OpenApi)]
#[openapi(
    info(
        title = "location-gallery",
        description = "Read-only REST API for a personal geotagged-location gallery."
    ),
    paths(
        locations::list_locations,
        locations::list_locations_paged,
        locations::list_locations_paged_long,
        locations::list_locations_by_title,
        locations::list_marked_important,
        locations::get_location,
        system::health_handler,
    ),
    components(schemas(
        Location,
        Pager,
        PagedLocationsResponse,
        ErrorResponse,
        system::HealthResponse,
    )),
    tags(
        (name = "Locations", description = "Location listings and lookup"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/docs`, serving the document at `/api-doc/openapi.json`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi())
}
