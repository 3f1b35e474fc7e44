//! Backend-neutral description of a location listing.
//!
//! [`LocationQuery`] carries the filter, sort, and window of a listing. The
//! PostgreSQL store renders it into SQL; the in-memory store evaluates it
//! with [`LocationQuery::matches`] and [`LocationQuery::compare`]. Both must
//! agree on ordering, so the comparison rules live here.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::Location;

/// Column a listing is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Creation time, ties broken by id.
    CreatedAt,
    /// Case-folded title, then exact title, then id.
    Title,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending.
    Asc,
    /// Descending.
    Desc,
}

impl SortDirection {
    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("asc"),
            Self::Desc => f.write_str("desc"),
        }
    }
}

/// Failure to parse a [`SortDirection`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort order {0:?}: expected \"asc\" or \"desc\"")]
pub struct ParseSortDirectionError(String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(ParseSortDirectionError(s.to_string())),
        }
    }
}

/// Filter, ordering, and window of a location listing.
///
/// Title matching and title ordering fold case with Unicode lowercase
/// rules. PostgreSQL's `lower()` and `ILIKE` agree only when the database
/// collation is not `C`/`POSIX`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// Case-insensitive substring the title must contain.
    pub title_contains: Option<String>,
    /// Required value of `markedImportant`.
    pub marked_important: Option<bool>,
    /// Sort column.
    pub sort: SortKey,
    /// Sort direction.
    pub direction: SortDirection,
    /// Rows to skip after sorting.
    pub offset: usize,
    /// Maximum rows to return; `None` returns everything.
    pub limit: Option<usize>,
}

impl LocationQuery {
    /// All locations, newest first.
    #[must_use]
    pub const fn newest_first() -> Self {
        Self {
            title_contains: None,
            marked_important: None,
            sort: SortKey::CreatedAt,
            direction: SortDirection::Desc,
            offset: 0,
            limit: None,
        }
    }

    /// All locations, A to Z by title.
    #[must_use]
    pub const fn alphabetical() -> Self {
        Self {
            title_contains: None,
            marked_important: None,
            sort: SortKey::Title,
            direction: SortDirection::Asc,
            offset: 0,
            limit: None,
        }
    }

    /// Restricts to titles containing `title`. Blank input means no filter.
    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title_contains = title.filter(|t| !t.is_empty());
        self
    }

    /// Restricts to rows with `markedImportant` set.
    #[must_use]
    pub fn important_only(mut self) -> Self {
        self.marked_important = Some(true);
        self
    }

    /// Overrides the sort direction when one is given.
    #[must_use]
    pub fn with_direction(mut self, direction: Option<SortDirection>) -> Self {
        if let Some(direction) = direction {
            self.direction = direction;
        }
        self
    }

    /// Limits the result to `limit` rows starting at `offset`.
    #[must_use]
    pub fn window(mut self, offset: usize, limit: usize) -> Self {
        self.offset = offset;
        self.limit = Some(limit);
        self
    }

    /// Drops the window, keeping filter and ordering. Used for counting.
    #[must_use]
    pub fn unwindowed(&self) -> Self {
        Self {
            offset: 0,
            limit: None,
            ..self.clone()
        }
    }

    /// Returns `true` when `location` passes every filter.
    #[must_use]
    pub fn matches(&self, location: &Location) -> bool {
        if let Some(flag) = self.marked_important
            && location.marked_important != flag
        {
            return false;
        }
        match &self.title_contains {
            Some(needle) => location
                .title
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }

    /// Orders two locations the way this query sorts them.
    #[must_use]
    pub fn compare(&self, a: &Location, b: &Location) -> Ordering {
        let ordering = match self.sort {
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)),
            SortKey::Title => a
                .title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.title.cmp(&b.title))
                .then(a.id.cmp(&b.id)),
        };
        self.direction.apply(ordering)
    }
}

impl Default for LocationQuery {
    fn default() -> Self {
        Self::newest_first()
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::domain::LocationId;

    fn location(id: i64, title: &str, minute: u32, important: bool) -> Location {
        let Some(created_at) = Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).single() else {
            panic!("valid timestamp");
        };
        Location {
            id: LocationId::new(id),
            title: title.to_string(),
            description: String::new(),
            marked_important: important,
            coordinate_n: None,
            coordinate_e: None,
            url: None,
            flickr_tag: None,
            flickr_more: None,
            video_embed: None,
            featured_image: None,
            created_at,
            updated_at: created_at,
        }
    }

    #[test]
    fn title_filter_is_case_insensitive_substring() {
        let query = LocationQuery::newest_first().with_title(Some("HARB".to_string()));
        assert!(query.matches(&location(1, "Old harbour", 0, false)));
        assert!(!query.matches(&location(2, "Forest", 0, false)));
    }

    #[test]
    fn title_filter_folds_non_ascii_letters() {
        let query = LocationQuery::newest_first().with_title(Some("äkäs".to_string()));
        assert!(query.matches(&location(1, "ÄKÄSLOMPOLO", 0, false)));
        assert!(query.matches(&location(2, "Fell near Äkäslompolo", 0, false)));
        assert!(!query.matches(&location(3, "Akaslompolo", 0, false)));
    }

    #[test]
    fn blank_title_means_no_filter() {
        let query = LocationQuery::newest_first().with_title(Some(String::new()));
        assert_eq!(query.title_contains, None);
        assert!(query.matches(&location(1, "Anything", 0, false)));
    }

    #[test]
    fn important_only_filters_flag() {
        let query = LocationQuery::newest_first().important_only();
        assert!(query.matches(&location(1, "A", 0, true)));
        assert!(!query.matches(&location(2, "B", 0, false)));
    }

    #[test]
    fn newest_first_orders_by_creation_desc_then_id_desc() {
        let query = LocationQuery::newest_first();
        let mut rows = vec![
            location(1, "a", 1, false),
            location(2, "b", 3, false),
            location(3, "c", 3, false),
            location(4, "d", 2, false),
        ];
        rows.sort_by(|a, b| query.compare(a, b));
        let ids: Vec<i64> = rows.iter().map(|l| l.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 4, 1]);
    }

    #[test]
    fn alphabetical_folds_case_and_can_reverse() {
        let mut rows = vec![
            location(1, "beach", 0, false),
            location(2, "Alps", 0, false),
            location(3, "Canyon", 0, false),
        ];
        let query = LocationQuery::alphabetical();
        rows.sort_by(|a, b| query.compare(a, b));
        let titles: Vec<&str> = rows.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Alps", "beach", "Canyon"]);

        let reversed = LocationQuery::alphabetical().with_direction(Some(SortDirection::Desc));
        rows.sort_by(|a, b| reversed.compare(a, b));
        let titles: Vec<&str> = rows.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, vec!["Canyon", "beach", "Alps"]);
    }

    #[test]
    fn sort_direction_parses_case_insensitively() {
        assert_eq!("ASC".parse::<SortDirection>().ok(), Some(SortDirection::Asc));
        assert_eq!(" desc ".parse::<SortDirection>().ok(), Some(SortDirection::Desc));
        assert!("sideways".parse::<SortDirection>().is_err());
    }

    #[test]
    fn unwindowed_keeps_filters() {
        let query = LocationQuery::newest_first()
            .with_title(Some("x".to_string()))
            .window(24, 12);
        let counted = query.unwindowed();
        assert_eq!(counted.offset, 0);
        assert_eq!(counted.limit, None);
        assert_eq!(counted.title_contains.as_deref(), Some("x"));
    }
}
