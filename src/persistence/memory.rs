//! In-memory location store.
//!
//! Holds a fixed set of rows keyed by id. Rows never change after
//! construction, so reads need no locking.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;

use super::LocationStore;
use crate::domain::{Location, LocationId, LocationQuery};
use crate::error::GalleryError;

/// Location store backed by a `BTreeMap`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    rows: BTreeMap<LocationId, Location>,
}

impl InMemoryStore {
    /// Creates a store holding `locations`. A later row with an id already
    /// seen replaces the earlier one.
    #[must_use]
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        Self {
            rows: locations.into_iter().map(|l| (l.id, l)).collect(),
        }
    }

    /// Reads a JSON array of locations from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Internal`] if the file cannot be read or is
    /// not a JSON array of locations.
    pub async fn load_seed(path: &Path) -> Result<Self, GalleryError> {
        let raw = tokio::fs::read(path).await.map_err(|e| {
            GalleryError::Internal(format!("reading seed file {}: {e}", path.display()))
        })?;
        let locations: Vec<Location> = serde_json::from_slice(&raw).map_err(|e| {
            GalleryError::Internal(format!("parsing seed file {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), rows = locations.len(), "loaded seed file");
        Ok(Self::new(locations))
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the store holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl LocationStore for InMemoryStore {
    async fn find(&self, query: &LocationQuery) -> Result<Vec<Location>, GalleryError> {
        let mut matched: Vec<&Location> = self.rows.values().filter(|l| query.matches(l)).collect();
        matched.sort_by(|a, b| query.compare(a, b));
        Ok(matched
            .into_iter()
            .skip(query.offset)
            .take(query.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }

    async fn count(&self, query: &LocationQuery) -> Result<usize, GalleryError> {
        Ok(self.rows.values().filter(|l| query.matches(l)).count())
    }

    async fn find_by_id(&self, id: LocationId) -> Result<Option<Location>, GalleryError> {
        Ok(self.rows.get(&id).cloned())
    }

    async fn ping(&self) -> Result<(), GalleryError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
pub(crate) mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    /// `count` locations with ids `1..=count`, created one minute apart so
    /// higher ids are newer. Every third row is marked important.
    pub(crate) fn sample_locations(count: i64) -> Vec<Location> {
        let Some(base) = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).single() else {
            panic!("valid timestamp");
        };
        (1..=count)
            .map(|i| {
                let created_at = base + Duration::minutes(i);
                Location {
                    id: LocationId::new(i),
                    title: format!("Location {i:03}"),
                    description: format!("Description of place {i}"),
                    marked_important: i % 3 == 0,
                    coordinate_n: Some(60.0 + i as f64 / 100.0),
                    coordinate_e: Some(24.0 + i as f64 / 100.0),
                    url: None,
                    flickr_tag: None,
                    flickr_more: None,
                    video_embed: None,
                    featured_image: Some(format!("https://img.example/{i}.jpg")),
                    created_at,
                    updated_at: created_at,
                }
            })
            .collect()
    }

    fn ids(rows: &[Location]) -> Vec<i64> {
        rows.iter().map(|l| l.id.get()).collect()
    }

    #[tokio::test]
    async fn find_returns_newest_first() {
        let store = InMemoryStore::new(sample_locations(5));
        let Ok(rows) = store.find(&LocationQuery::newest_first()).await else {
            panic!("find failed");
        };
        assert_eq!(ids(&rows), vec![5, 4, 3, 2, 1]);
    }

    #[tokio::test]
    async fn find_applies_window() {
        let store = InMemoryStore::new(sample_locations(30));
        let query = LocationQuery::newest_first().window(12, 12);
        let Ok(rows) = store.find(&query).await else {
            panic!("find failed");
        };
        assert_eq!(ids(&rows), (7..=18).rev().collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn count_ignores_window_but_honours_filters() {
        let store = InMemoryStore::new(sample_locations(30));
        let query = LocationQuery::newest_first().important_only().window(0, 2);
        assert_eq!(store.count(&query).await.ok(), Some(10));
    }

    #[tokio::test]
    async fn find_by_id_distinguishes_missing_rows() {
        let store = InMemoryStore::new(sample_locations(3));
        let Ok(found) = store.find_by_id(LocationId::new(2)).await else {
            panic!("lookup failed");
        };
        assert_eq!(found.map(|l| l.title), Some("Location 002".to_string()));

        let Ok(missing) = store.find_by_id(LocationId::new(99)).await else {
            panic!("lookup failed");
        };
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn duplicate_ids_keep_last_row() {
        let mut rows = sample_locations(2);
        let mut replacement = sample_locations(1);
        if let Some(first) = replacement.first_mut() {
            first.title = "Replaced".to_string();
        }
        rows.append(&mut replacement);

        let store = InMemoryStore::new(rows);
        assert_eq!(store.len(), 2);
        let Ok(Some(row)) = store.find_by_id(LocationId::new(1)).await else {
            panic!("row 1 must exist");
        };
        assert_eq!(row.title, "Replaced");
    }

    #[tokio::test]
    async fn undated_seed_rows_order_by_id() {
        let json = r#"[{"id": 2, "title": "B"}, {"id": 7, "title": "C"}, {"id": 4, "title": "A"}]"#;
        let Ok(rows) = serde_json::from_str::<Vec<Location>>(json) else {
            panic!("rows parse");
        };
        let store = InMemoryStore::new(rows);
        for _ in 0..3 {
            let Ok(found) = store.find(&LocationQuery::newest_first()).await else {
                panic!("find failed");
            };
            assert_eq!(ids(&found), vec![7, 4, 2]);
        }
    }

    #[tokio::test]
    async fn load_seed_reports_missing_file() {
        let result = InMemoryStore::load_seed(Path::new("/nonexistent/seed.json")).await;
        assert!(matches!(result, Err(GalleryError::Internal(_))));
    }

    #[tokio::test]
    async fn load_seed_reads_json_array() {
        let path = std::env::temp_dir().join(format!("gallery-seed-{}.json", std::process::id()));
        let json = r#"[{"id": 1, "title": "Fjord"}, {"id": 2, "title": "Glacier", "markedImportant": true}]"#;
        if tokio::fs::write(&path, json).await.is_err() {
            panic!("could not write seed file");
        }
        let result = InMemoryStore::load_seed(&path).await;
        let _ = tokio::fs::remove_file(&path).await;

        let Ok(store) = result else {
            panic!("seed must load");
        };
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.count(&LocationQuery::newest_first().important_only()).await.ok(),
            Some(1)
        );
    }
}
