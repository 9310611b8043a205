//! Catalog page navigation.
//!
//! [`Route`] is the table of pages the catalog serves. [`Navigator`] resolves
//! locations against it and resets the viewport after every navigation.

mod viewport;

pub use viewport::{HeadlessViewport, ScrollBehavior, ScrollPosition, Viewport};

use derive_more::{Display, Error};

use marquee_model::movie::MovieId;

use yew_router::Routable;

/// A catalog page.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/movies")]
    Movies,
    #[at("/movie/:id")]
    MovieDetail { id: String },
    #[at("/search")]
    Search,
    #[at("/admin")]
    Admin,
}

impl Route {
    /// The name of the view the route shows.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Movies => "Movies",
            Route::MovieDetail { .. } => "MovieDetail",
            Route::Search => "Search",
            Route::Admin => "Admin",
        }
    }

    /// The detail page of a movie.
    ///
    /// The id is percent-encoded into the path segment.
    pub fn movie(id: impl Into<MovieId>) -> Route {
        let id: MovieId = id.into();
        Route::MovieDetail {
            id: urlencoding::encode(id.as_str()).into_owned(),
        }
    }

    /// The movie a detail route shows.
    ///
    /// The captured segment is kept as it appears in the location; this
    /// decodes it with [`decode_movie_id`].
    pub fn movie_id(&self) -> Option<MovieId> {
        match self {
            Route::MovieDetail { id } => Some(decode_movie_id(id)),
            _ => None,
        }
    }
}

/// Percent-decodes a movie id path segment, replacing invalid UTF-8.
pub fn decode_movie_id(segment: &str) -> MovieId {
    let id = urlencoding::decode_binary(segment.as_bytes());
    MovieId::new(String::from_utf8_lossy(&id))
}

/// A resolved location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    /// The matched route.
    pub route: Route,
    /// The decoded query string pairs, in order.
    pub query: Vec<(String, String)>,
}

impl Navigation {
    /// Resolves a location, such as `/search?q=matrix`, into a navigation.
    ///
    /// Fragments are ignored.
    pub fn resolve(location: &str) -> Result<Navigation, NavigationError> {
        let location = location
            .split_once('#')
            .map_or(location, |(location, _)| location);
        let (path, query) = location.split_once('?').unwrap_or((location, ""));

        let route =
            Route::recognize(path).ok_or_else(|| NavigationError::NoRoute(path.to_owned()))?;
        // string pairs decode lossily, so this cannot fail
        let query = serde_urlencoded::from_str(query).unwrap_or_default();

        Ok(Navigation { route, query })
    }

    /// Gets the first value of a query parameter.
    pub fn query(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl From<Route> for Navigation {
    fn from(route: Route) -> Self {
        Navigation {
            route,
            query: Vec::new(),
        }
    }
}

/// Keeps track of the current page.
#[derive(Debug)]
pub struct Navigator<V> {
    viewport: V,
    current: Option<Navigation>,
}

impl<V> Navigator<V>
where
    V: Viewport,
{
    /// Creates a new `Navigator` that has not navigated anywhere yet.
    pub fn new(viewport: V) -> Navigator<V> {
        Navigator {
            viewport,
            current: None,
        }
    }

    /// The current page.
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Navigates to a location.
    ///
    /// On success the viewport is scrolled back to the top. Locations no
    /// route matches leave the current page and the viewport untouched.
    pub fn navigate(&mut self, location: &str) -> Result<&Navigation, NavigationError> {
        let navigation = Navigation::resolve(location)?;
        Ok(self.complete(navigation))
    }

    /// Navigates to a route.
    pub fn push(&mut self, route: Route) -> &Navigation {
        self.complete(route.into())
    }

    fn complete(&mut self, navigation: Navigation) -> &Navigation {
        tracing::debug!(view = navigation.route.name(), path = %navigation.route.to_path(), "navigated");

        let navigation = self.current.insert(navigation);
        self.viewport.scroll_to(ScrollPosition::TOP);
        navigation
    }
}

/// A location could not be navigated to.
#[derive(Debug, Display, Error)]
pub enum NavigationError {
    /// No route matches the path.
    #[display("no route matches \"{_0}\"")]
    NoRoute(#[error(not(source))] String),
}
