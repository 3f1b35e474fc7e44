//! Location service: listing, paging, and lookup.

use std::sync::Arc;

use crate::config::PagingConfig;
use crate::domain::{Location, LocationId, LocationPage, LocationQuery, Pager, SortDirection};
use crate::error::GalleryError;
use crate::persistence::LocationStore;

/// Which page size a paged listing uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLength {
    /// Grid pages (`PAGE_SIZE`, 12 by default).
    Standard,
    /// Long list pages (`PAGE_SIZE_LONG`, 50 by default).
    Long,
}

/// Orchestration layer for all location reads.
///
/// Stateless coordinator over a [`LocationStore`]. Paged listings count
/// the matching rows first, compute a [`Pager`], then fetch only the rows
/// inside the pager's slice bounds.
#[derive(Debug, Clone)]
pub struct LocationService {
    store: Arc<dyn LocationStore>,
    paging: PagingConfig,
}

impl LocationService {
    /// Creates a new `LocationService`.
    #[must_use]
    pub fn new(store: Arc<dyn LocationStore>, paging: PagingConfig) -> Self {
        Self { store, paging }
    }

    /// Returns the underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn LocationStore> {
        &self.store
    }

    /// Page size for `length`.
    #[must_use]
    pub const fn page_size(&self, length: PageLength) -> usize {
        match length {
            PageLength::Standard => self.paging.page_size,
            PageLength::Long => self.paging.page_size_long,
        }
    }

    /// All locations, newest first unless `direction` says otherwise,
    /// optionally restricted to titles containing `title`.
    ///
    /// # Errors
    ///
    /// Returns a [`GalleryError`] if the store fails.
    pub async fn list(
        &self,
        title: Option<String>,
        direction: Option<SortDirection>,
    ) -> Result<Vec<Location>, GalleryError> {
        let query = LocationQuery::newest_first()
            .with_title(title)
            .with_direction(direction);
        let rows = self.store.find(&query).await?;
        tracing::debug!(rows = rows.len(), title = ?query.title_contains, "listed locations");
        Ok(rows)
    }

    /// All locations sorted A to Z by title unless `direction` says
    /// otherwise.
    ///
    /// # Errors
    ///
    /// Returns a [`GalleryError`] if the store fails.
    pub async fn list_alphabetical(
        &self,
        direction: Option<SortDirection>,
    ) -> Result<Vec<Location>, GalleryError> {
        let query = LocationQuery::alphabetical().with_direction(direction);
        self.store.find(&query).await
    }

    /// Locations with `markedImportant` set, newest first.
    ///
    /// # Errors
    ///
    /// Returns a [`GalleryError`] if the store fails.
    pub async fn list_marked_important(&self) -> Result<Vec<Location>, GalleryError> {
        let query = LocationQuery::newest_first().important_only();
        self.store.find(&query).await
    }

    /// One page of the newest-first listing.
    ///
    /// `page` is the client's requested page and is snapped into range by
    /// the pager.
    ///
    /// # Errors
    ///
    /// Returns a [`GalleryError`] if the store fails or the paging
    /// configuration is invalid.
    pub async fn list_paged(
        &self,
        title: Option<String>,
        page: i64,
        length: PageLength,
    ) -> Result<LocationPage, GalleryError> {
        let query = LocationQuery::newest_first().with_title(title);
        let page_size = self.page_size(length);

        let total = self.store.count(&query).await?;
        let pager = Pager::with_max_pages(total, page, page_size, self.paging.max_pages)?;

        let items = if pager.is_empty() {
            Vec::new()
        } else {
            self.store
                .find(&query.window(pager.start_index, pager.len()))
                .await?
        };

        tracing::debug!(
            total,
            page = pager.current_page,
            total_pages = pager.total_pages,
            rows = items.len(),
            "listed location page"
        );
        Ok(LocationPage { pager, items })
    }

    /// Looks up one location.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::LocationNotFound`] if no row has `id`, or a
    /// [`GalleryError`] if the store fails.
    pub async fn get(&self, id: LocationId) -> Result<Location, GalleryError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(GalleryError::LocationNotFound(id))
    }
}
