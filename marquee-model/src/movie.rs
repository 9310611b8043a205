//! Movie data models.

use std::collections::BTreeMap;

use derive_more::{Deref, Display, From, Into};

use serde::{Deserialize, Serialize};

/// A movie identifier.
///
/// The backend stores ids as strings, but the catalog only ever hands out
/// numeric ones, so integers convert directly.
#[derive(Clone, Debug, Display, From, Into, Deref, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    /// Creates a new `MovieId`.
    pub fn new(id: impl Into<String>) -> MovieId {
        MovieId(id.into())
    }

    /// The id as it appears in a URL path segment.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for MovieId {
    fn from(value: &str) -> Self {
        MovieId(value.to_owned())
    }
}

impl From<u32> for MovieId {
    fn from(value: u32) -> Self {
        MovieId(value.to_string())
    }
}

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        MovieId(value.to_string())
    }
}

/// A single movie as listed by the catalog.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Movie {
    /// The unique identifier of the movie.
    pub id: MovieId,
    /// The movie's title, usually suffixed with its release year.
    pub title: String,
    /// The movie's genres, separated by `|`.
    pub genres: String,
    /// The average of every rating the movie received.
    #[serde(default)]
    pub avg_rating: f64,
    /// How many ratings the movie received.
    #[serde(default)]
    pub rating_count: u64,
}

impl Movie {
    /// Iterates over the individual genres of the movie.
    pub fn genre_list(&self) -> impl Iterator<Item = &str> {
        self.genres.split('|').filter(|genre| !genre.is_empty())
    }
}

/// A user's rating of a movie.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Rating {
    pub user_id: String,
    pub movie_id: MovieId,
    /// The score, from `0.5` to `5.0`.
    pub rating: f64,
    /// When the rating was made, as the backend formats it.
    pub timestamp: String,
}

/// Aggregated statistics over the ratings of a movie.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RatingStats {
    pub avg_rating: f64,
    pub total_count: u64,
    /// How many ratings were given for each score, keyed by the score.
    pub rating_distribution: BTreeMap<String, u64>,
}

/// A movie with its rating details.
///
/// The detail endpoint may omit the rating details, in which case only the
/// listed fields are present.
#[derive(Clone, Debug, Deref, Deserialize, PartialEq, Serialize)]
pub struct MovieDetail {
    /// The movie.
    #[deref]
    #[serde(flatten)]
    pub movie: Movie,
    /// The latest ratings of the movie.
    #[serde(default)]
    pub recent_ratings: Vec<Rating>,
    /// Rating statistics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_stats: Option<RatingStats>,
}
