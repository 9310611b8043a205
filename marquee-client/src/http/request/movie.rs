//! Movie queries.

use futures_util::future::BoxFuture;

use http::Method;

use marquee_model::{
    movie::{MovieDetail, MovieId},
    request::movie::{FeaturedQuery, PageQuery, SearchQuery},
    response::movie::{FeaturedMovies, MovieList, RatingList, SearchResults},
};

use crate::http::{Client, Error};

/// Gets the featured movies.
#[derive(Debug)]
pub struct GetFeatured {
    client: Client,
    query: FeaturedQuery,
}

impl GetFeatured {
    /// Creates a new `GetFeatured`.
    pub fn new(client: Client) -> GetFeatured {
        GetFeatured {
            client,
            query: FeaturedQuery::default(),
        }
    }

    /// How many movies should be returned.
    ///
    /// By default, it is `8`.
    pub fn count(self, count: u32) -> GetFeatured {
        GetFeatured {
            query: FeaturedQuery { count },
            ..self
        }
    }
}

impl IntoFuture for GetFeatured {
    type Output = Result<FeaturedMovies, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            self.client
                .request(Method::GET, "/movies/featured")
                .query(&self.query)
                .execute()
                .await
        })
    }
}

/// Lists movies a page at a time.
#[derive(Debug)]
pub struct ListMovies {
    client: Client,
    query: PageQuery,
}

impl ListMovies {
    /// Creates a new `ListMovies`.
    pub fn new(client: Client) -> ListMovies {
        ListMovies {
            client,
            query: PageQuery::default(),
        }
    }

    /// The page to get. By default, it is `1`.
    pub fn page(mut self, page: u32) -> ListMovies {
        self.query.page = page;
        self
    }

    /// How many movies a page holds. By default, it is `20`.
    pub fn page_size(mut self, page_size: u32) -> ListMovies {
        self.query.page_size = page_size;
        self
    }
}

impl IntoFuture for ListMovies {
    type Output = Result<MovieList, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            self.client
                .request(Method::GET, "/movies")
                .query(&self.query)
                .execute()
                .await
        })
    }
}

/// Searches movies.
#[derive(Debug)]
pub struct SearchMovies {
    client: Client,
    query: SearchQuery,
}

impl SearchMovies {
    /// Creates a new `SearchMovies`.
    pub fn new(client: Client, query: String) -> SearchMovies {
        SearchMovies {
            client,
            query: SearchQuery::new(query),
        }
    }

    /// How many results should be returned.
    ///
    /// By default, it is `50`.
    pub fn limit(mut self, limit: u32) -> SearchMovies {
        self.query.limit = limit;
        self
    }
}

impl IntoFuture for SearchMovies {
    type Output = Result<SearchResults, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            self.client
                .request(Method::GET, "/movies/search")
                .query(&self.query)
                .execute()
                .await
        })
    }
}

/// Gets a movie by its id.
#[derive(Debug)]
pub struct GetMovie {
    client: Client,
    id: MovieId,
}

impl GetMovie {
    /// Creates a new `GetMovie`.
    pub fn new(client: Client, id: MovieId) -> GetMovie {
        GetMovie { client, id }
    }
}

impl IntoFuture for GetMovie {
    type Output = Result<MovieDetail, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            self.client
                .request(Method::GET, movie_path(&self.id))
                .execute()
                .await
        })
    }
}

/// Lists the ratings of a movie a page at a time.
#[derive(Debug)]
pub struct ListRatings {
    client: Client,
    id: MovieId,
    query: PageQuery,
}

impl ListRatings {
    /// Creates a new `ListRatings`.
    pub fn new(client: Client, id: MovieId) -> ListRatings {
        ListRatings {
            client,
            id,
            query: PageQuery::default(),
        }
    }

    /// The page to get. By default, it is `1`.
    pub fn page(mut self, page: u32) -> ListRatings {
        self.query.page = page;
        self
    }

    /// How many ratings a page holds. By default, it is `20`.
    pub fn page_size(mut self, page_size: u32) -> ListRatings {
        self.query.page_size = page_size;
        self
    }
}

impl IntoFuture for ListRatings {
    type Output = Result<RatingList, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move {
            self.client
                .request(Method::GET, format!("{}/ratings", movie_path(&self.id)))
                .query(&self.query)
                .execute()
                .await
        })
    }
}

fn movie_path(id: &MovieId) -> String {
    format!("/movies/{}", urlencoding::encode(id.as_str()))
}
