//! API responses.

pub mod admin;
pub mod movie;

use serde::{Deserialize, Serialize};

/// A response from `GET /` under the API base path.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Health {
    /// `"ok"` when the server can reach its store, `"error"` otherwise.
    pub status: String,
    /// Whether the server is connected to HBase.
    pub hbase_connected: bool,
    /// The server's version.
    pub version: String,
}

impl Health {
    /// Checks if the server reports itself healthy.
    pub fn is_ok(&self) -> bool {
        self.status == "ok" && self.hbase_connected
    }
}
