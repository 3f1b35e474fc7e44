//! Database row model for the `locations` table.

use chrono::{DateTime, Utc};

use crate::domain::{Location, LocationId};

/// Column list shared by every `SELECT` against `locations`.
pub const LOCATION_COLUMNS: &str = "id, title, description, marked_important, \
     coordinate_n, coordinate_e, url, flickr_tag, flickr_more, video_embed, \
     featured_image, created_at, updated_at";

/// A stored row from the `locations` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LocationRow {
    /// `BIGSERIAL` primary key.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Free text.
    pub description: String,
    /// Importance flag.
    pub marked_important: bool,
    /// Latitude.
    pub coordinate_n: Option<f64>,
    /// Longitude.
    pub coordinate_e: Option<f64>,
    /// External link.
    pub url: Option<String>,
    /// Flickr tag.
    pub flickr_tag: Option<String>,
    /// Flickr "more" link.
    pub flickr_more: Option<String>,
    /// Video embed URL.
    pub video_embed: Option<String>,
    /// Featured image URL.
    pub featured_image: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Self {
            id: LocationId::new(row.id),
            title: row.title,
            description: row.description,
            marked_important: row.marked_important,
            coordinate_n: row.coordinate_n,
            coordinate_e: row.coordinate_e,
            url: row.url,
            flickr_tag: row.flickr_tag,
            flickr_more: row.flickr_more,
            video_embed: row.video_embed,
            featured_image: row.featured_image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}
