//! Movie endpoint query models.

use serde::{Deserialize, Serialize};

/// The default number of featured movies.
pub const DEFAULT_FEATURED_COUNT: u32 = 8;
/// The default page.
pub const DEFAULT_PAGE: u32 = 1;
/// The default page size.
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// The default search result limit.
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;

/// Query for `GET /movies/featured`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct FeaturedQuery {
    /// How many movies should be returned.
    pub count: u32,
}

impl Default for FeaturedQuery {
    fn default() -> Self {
        FeaturedQuery {
            count: DEFAULT_FEATURED_COUNT,
        }
    }
}

/// Pagination query for `GET /movies` and `GET /movies/{id}/ratings`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    /// The page, starting at `1`.
    pub page: u32,
    /// How many results a page holds.
    pub page_size: u32,
}

impl Default for PageQuery {
    fn default() -> Self {
        PageQuery {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Query for `GET /movies/search`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    /// Search term.
    pub q: String,
    /// How many results should be returned.
    pub limit: u32,
}

impl SearchQuery {
    /// Creates a new `SearchQuery` with the default limit.
    pub fn new(q: impl Into<String>) -> SearchQuery {
        SearchQuery {
            q: q.into(),
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}
