//! Movie API responses.

use serde::{Deserialize, Serialize};

use crate::movie::{Movie, Rating};

/// A response from `GET /movies/featured`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FeaturedMovies {
    pub movies: Vec<Movie>,
    pub total: u64,
}

/// A response from `GET /movies`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MovieList {
    /// The movies on this page.
    pub movies: Vec<Movie>,
    /// How many movies are in the catalog.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// A response from `GET /movies/{id}/ratings`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RatingList {
    /// The ratings on this page.
    pub ratings: Vec<Rating>,
    /// How many ratings the movie has.
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

/// A response from `GET /movies/search`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchResults {
    /// Matching movies, best matches first.
    pub movies: Vec<Movie>,
    /// The search term, as the server received it.
    pub query: String,
    pub total: u64,
}
