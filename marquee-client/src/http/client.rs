//! Marquee API client.

use std::sync::Arc;
use std::time::Duration;

use derive_more::{Display, Error, From};

use http::{Method, StatusCode};

use marquee_model::movie::MovieId;

use serde::{Serialize, de::DeserializeOwned};

use crate::config::ApiConfig;
use crate::http::interceptor::{Identity, Observer, RequestInterceptor, TracingObserver};
use crate::http::request::admin::{
    GetBatchLogs, GetBatchStatus, ReloadIndex, StartBatch, StopBatch,
};
use crate::http::request::movie::{GetFeatured, GetMovie, ListMovies, ListRatings, SearchMovies};
use crate::http::request::GetHealth;

/// A client used to access the catalog API.
///
/// Cheaply cloneable, as it uses an `Arc` to track internal state and manage
/// connections. Build one per application and hand clones to whatever needs
/// it.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    state: Arc<ClientState>,
    interceptor: Arc<dyn RequestInterceptor>,
    observer: Arc<dyn Observer>,
}

#[derive(Debug)]
struct ClientState {
    endpoint: String,
    timeout: Duration,
}

impl Client {
    /// Creates a new client.
    ///
    /// Requests pass through unchanged and failures are logged with
    /// [`TracingObserver`] until replaced with [`Client::with_interceptor`]
    /// and [`Client::with_observer`].
    pub fn new(config: &ApiConfig) -> Result<Client, Error> {
        let http = reqwest::Client::builder().use_rustls_tls().build()?;

        let state = ClientState {
            endpoint: config.endpoint(),
            timeout: config.timeout(),
        };

        Ok(Client {
            http,
            state: Arc::new(state),
            interceptor: Arc::new(Identity),
            observer: Arc::new(TracingObserver),
        })
    }

    /// Replaces the hook every outgoing request passes through.
    pub fn with_interceptor(self, interceptor: impl RequestInterceptor + 'static) -> Client {
        Client {
            interceptor: Arc::new(interceptor),
            ..self
        }
    }

    /// Replaces the hook told about every failed request.
    pub fn with_observer(self, observer: impl Observer + 'static) -> Client {
        Client {
            observer: Arc::new(observer),
            ..self
        }
    }

    /// The URL every request path is appended to.
    pub fn endpoint(&self) -> &str {
        &self.state.endpoint
    }

    // movies

    /// Gets the featured movies shown on the home page.
    pub fn featured_movies(&self) -> GetFeatured {
        GetFeatured::new(self.clone())
    }

    /// Lists the catalog a page at a time.
    pub fn movies(&self) -> ListMovies {
        ListMovies::new(self.clone())
    }

    /// Searches movies by title.
    pub fn search_movies(&self, query: impl Into<String>) -> SearchMovies {
        SearchMovies::new(self.clone(), query.into())
    }

    /// Gets a single movie.
    pub fn movie_detail(&self, id: impl Into<MovieId>) -> GetMovie {
        GetMovie::new(self.clone(), id.into())
    }

    /// Lists the ratings of a movie a page at a time.
    pub fn movie_ratings(&self, id: impl Into<MovieId>) -> ListRatings {
        ListRatings::new(self.clone(), id.into())
    }

    // admin

    /// Gets the state of the batch job.
    pub fn batch_status(&self) -> GetBatchStatus {
        GetBatchStatus::new(self.clone())
    }

    /// Gets the log output of the batch job.
    pub fn batch_logs(&self) -> GetBatchLogs {
        GetBatchLogs::new(self.clone())
    }

    /// Starts the batch job.
    pub fn start_batch(&self) -> StartBatch {
        StartBatch::new(self.clone())
    }

    /// Stops the batch job.
    pub fn stop_batch(&self) -> StopBatch {
        StopBatch::new(self.clone())
    }

    /// Makes the server reload its movie search index.
    pub fn reload_index(&self) -> ReloadIndex {
        ReloadIndex::new(self.clone())
    }

    /// Checks the health of the server.
    pub fn health(&self) -> GetHealth {
        GetHealth::new(self.clone())
    }

    /// Makes a generic request to the server.
    pub(crate) fn request(&self, method: Method, url: impl AsRef<str>) -> Request {
        Request::new(self.clone(), method, url)
    }

    /// Reports a failure to the observer and hands it back.
    fn fail(&self, err: reqwest::Error) -> Error {
        let err = Error::from(err);
        self.observer.on_error(&err);
        err
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint", &self.state.endpoint)
            .field("timeout", &self.state.timeout)
            .finish_non_exhaustive()
    }
}

/// A HTTP client request.
#[derive(Debug)]
pub struct Request {
    client: Client,
    request: reqwest::RequestBuilder,
}

impl Request {
    /// Creates a new `Request`.
    ///
    /// The url is appended to the API endpoint and the client's timeout is
    /// applied.
    pub fn new(client: Client, method: Method, url: impl AsRef<str>) -> Request {
        let url = format!("{}{}", client.state.endpoint, url.as_ref());

        Request {
            request: client
                .http
                .request(method, url)
                .timeout(client.state.timeout),
            client,
        }
    }

    /// Serializes the query string into the request.
    pub fn query<T>(self, query: &T) -> Request
    where
        T: Serialize + ?Sized,
    {
        Request {
            request: self.request.query(query),
            ..self
        }
    }

    /// Makes a general request to the API.
    ///
    /// Non-success statuses are turned into errors. Every error is reported to
    /// the client's observer exactly once.
    pub async fn send(self) -> Result<reqwest::Response, Error> {
        let Request { client, request } = self;

        let request = request
            .build()
            .and_then(|request| client.interceptor.intercept(request))
            .map_err(|err| client.fail(err))?;

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let res = client
            .http
            .execute(request)
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| client.fail(err))?;

        Ok(res)
    }

    /// Sends the request and decodes the response body.
    pub async fn execute<T>(self) -> Result<T, Error>
    where
        T: DeserializeOwned,
    {
        let client = self.client.clone();
        let res = self.send().await?;

        res.json::<T>().await.map_err(|err| client.fail(err))
    }
}

/// A failed API request.
///
/// Transport failures and non-success statuses are not told apart; the
/// underlying [`reqwest::Error`] is the error's source either way.
#[derive(Debug, Display, Error, From)]
#[display("api request failed: {_0}")]
pub struct Error(#[error(source)] reqwest::Error);

impl Error {
    /// The status code of the response, if the server responded.
    pub fn status(&self) -> Option<StatusCode> {
        self.0.status()
    }

    /// Checks if the request timed out.
    pub fn is_timeout(&self) -> bool {
        self.0.is_timeout()
    }

    /// The underlying error.
    pub fn inner(&self) -> &reqwest::Error {
        &self.0
    }

    /// Unwraps the underlying error.
    pub fn into_inner(self) -> reqwest::Error {
        self.0
    }
}
