//! The gallery's only persisted entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{LocationId, Pager};

/// A geotagged gallery entry.
///
/// Field names serialize in camelCase (`markedImportant`, `coordinateN`,
/// `createdAt`, ...) to match the JSON contract the gallery frontend reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Database-generated primary key.
    #[schema(value_type = i64)]
    pub id: LocationId,
    /// Display title.
    pub title: String,
    /// Free text; may contain newlines and repeated whitespace.
    #[serde(default)]
    pub description: String,
    /// Promotes the location in importance-filtered views.
    #[serde(default)]
    pub marked_important: bool,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub coordinate_n: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub coordinate_e: Option<f64>,
    /// External link.
    #[serde(default)]
    pub url: Option<String>,
    /// Flickr tag used to pull a photo set.
    #[serde(default)]
    pub flickr_tag: Option<String>,
    /// Link to more photos on Flickr.
    #[serde(default)]
    pub flickr_more: Option<String>,
    /// Embeddable video URL.
    #[serde(default)]
    pub video_embed: Option<String>,
    /// Image shown on cards and list rows.
    #[serde(default)]
    pub featured_image: Option<String>,
    /// Row creation time. Defaults to the Unix epoch when absent.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    /// Last modification time. Defaults to the Unix epoch when absent.
    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

/// One page of locations together with the pager that selected it.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationPage {
    /// Page descriptor.
    pub pager: Pager,
    /// Locations inside the pager's slice bounds.
    pub items: Vec<Location>,
}
