//! Catalog API requests.
//!
//! Each request is a builder returned by a [`Client`] method. Awaiting it
//! sends exactly one request and resolves to the decoded response body.

pub mod admin;
pub mod movie;

use futures_util::future::BoxFuture;

use http::Method;

use marquee_model::response::Health;

use crate::http::{Client, Error};

/// Checks the health of the server.
#[derive(Debug)]
pub struct GetHealth {
    client: Client,
}

impl GetHealth {
    /// Creates a new `GetHealth`.
    pub fn new(client: Client) -> GetHealth {
        GetHealth { client }
    }
}

impl IntoFuture for GetHealth {
    type Output = Result<Health, Error>;
    type IntoFuture = BoxFuture<'static, Self::Output>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(async move { self.client.request(Method::GET, "/").execute().await })
    }
}
