//! Batch job and index control.

use futures_util::future::BoxFuture;

use http::Method;

use marquee_model::{
    batch::{BatchLogs, BatchStatus},
    response::admin::{Acknowledgement, BatchStarted},
};

use crate::http::{Client, Error};

/// Declares a parameterless admin request.
macro_rules! admin_request {
    ($(#[$meta:meta])* $name:ident, $method:ident $path:literal => $output:ty) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name {
            client: Client,
        }

        impl $name {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            pub fn new(client: Client) -> $name {
                $name { client }
            }
        }

        impl IntoFuture for $name {
            type Output = Result<$output, Error>;
            type IntoFuture = BoxFuture<'static, Self::Output>;

            fn into_future(self) -> Self::IntoFuture {
                Box::pin(async move {
                    self.client.request(Method::$method, $path).execute().await
                })
            }
        }
    };
}

admin_request! {
    /// Gets the state of the batch job.
    GetBatchStatus, GET "/admin/batch/status" => BatchStatus
}

admin_request! {
    /// Gets the log output of the batch job.
    GetBatchLogs, GET "/admin/batch/logs" => BatchLogs
}

admin_request! {
    /// Starts the batch job.
    ///
    /// The server refuses with `400 Bad Request` if a job is already running.
    StartBatch, POST "/admin/batch/start" => BatchStarted
}

admin_request! {
    /// Stops the batch job, if one is running.
    StopBatch, POST "/admin/batch/stop" => Acknowledgement
}

admin_request! {
    /// Makes the server reload its movie search index.
    ReloadIndex, POST "/admin/index/reload" => Acknowledgement
}
