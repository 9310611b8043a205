//! Hooks applied to every request and failed response.

use crate::http::Error;

/// A hook every outgoing request passes through before it is sent.
pub trait RequestInterceptor: Send + Sync {
    /// Transforms the request.
    ///
    /// An error aborts the request and is returned to the caller as is.
    fn intercept(&self, request: reqwest::Request) -> Result<reqwest::Request, reqwest::Error>;
}

impl<F> RequestInterceptor for F
where
    F: Fn(reqwest::Request) -> Result<reqwest::Request, reqwest::Error> + Send + Sync,
{
    fn intercept(&self, request: reqwest::Request) -> Result<reqwest::Request, reqwest::Error> {
        self(request)
    }
}

/// Passes requests through unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl RequestInterceptor for Identity {
    fn intercept(&self, request: reqwest::Request) -> Result<reqwest::Request, reqwest::Error> {
        Ok(request)
    }
}

/// A hook told about every failed request.
///
/// The error is still returned to the caller afterwards; observers cannot
/// recover from or replace it.
pub trait Observer: Send + Sync {
    fn on_error(&self, err: &Error);
}

/// Logs failed requests with [`tracing`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl Observer for TracingObserver {
    fn on_error(&self, err: &Error) {
        let inner = err.inner();

        tracing::error!(
            status = ?err.status(),
            url = ?inner.url().map(|url| url.as_str()),
            "API error: {}",
            inner,
        );
    }
}
