//! Data loaded by each catalog page.

use futures_util::future::{join, try_join};

use marquee_model::{
    batch::{BatchLogs, BatchStatus},
    movie::MovieDetail,
    response::movie::{FeaturedMovies, MovieList, RatingList, SearchResults},
};

use serde::Serialize;

use tracing::instrument;

use crate::http::{Client, Error};
use crate::nav::{Navigation, Route, decode_movie_id};

/// What a page shows once loaded.
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "view")]
pub enum ViewData {
    Home {
        featured: FeaturedMovies,
    },
    Movies {
        movies: MovieList,
    },
    /// The ratings are left out when they fail to load; the movie is shown
    /// regardless.
    MovieDetail {
        movie: MovieDetail,
        ratings: Option<RatingList>,
    },
    /// The search page shows nothing until it has a term.
    Search {
        results: Option<SearchResults>,
    },
    Admin {
        status: BatchStatus,
        logs: BatchLogs,
    },
}

/// Loads the data of the page at `navigation`.
///
/// `page` and `page_size` query parameters select the page of list views;
/// `q` and `limit` drive the search page.
#[instrument(skip(client), fields(view = navigation.route.name()))]
pub async fn load(client: &Client, navigation: &Navigation) -> Result<ViewData, Error> {
    let page = query_number(navigation, "page");
    let page_size = query_number(navigation, "page_size");

    match &navigation.route {
        Route::Home => Ok(ViewData::Home {
            featured: client.featured_movies().await?,
        }),
        Route::Movies => {
            let mut request = client.movies();
            if let Some(page) = page {
                request = request.page(page);
            }
            if let Some(page_size) = page_size {
                request = request.page_size(page_size);
            }

            Ok(ViewData::Movies {
                movies: request.await?,
            })
        }
        Route::MovieDetail { id } => {
            let id = decode_movie_id(id);

            let mut ratings = client.movie_ratings(id.clone());
            if let Some(page) = page {
                ratings = ratings.page(page);
            }
            if let Some(page_size) = page_size {
                ratings = ratings.page_size(page_size);
            }

            let (movie, ratings) = join(
                client.movie_detail(id).into_future(),
                ratings.into_future(),
            )
            .await;

            // the observer has already seen a ratings failure
            Ok(ViewData::MovieDetail {
                movie: movie?,
                ratings: ratings.ok(),
            })
        }
        Route::Search => {
            let Some(term) = navigation.query("q").filter(|q| !q.trim().is_empty()) else {
                return Ok(ViewData::Search { results: None });
            };

            let mut request = client.search_movies(term);
            if let Some(limit) = query_number(navigation, "limit") {
                request = request.limit(limit);
            }

            Ok(ViewData::Search {
                results: Some(request.await?),
            })
        }
        Route::Admin => {
            let (status, logs) = try_join(
                client.batch_status().into_future(),
                client.batch_logs().into_future(),
            )
            .await?;

            Ok(ViewData::Admin { status, logs })
        }
    }
}

fn query_number(navigation: &Navigation, key: &str) -> Option<u32> {
    navigation.query(key).and_then(|value| value.parse().ok())
}
