//! Admin API responses.

use serde::{Deserialize, Serialize};

/// A response from `POST /admin/batch/start`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct BatchStarted {
    pub message: String,
    /// The job's state right after starting, usually `"running"`.
    pub status: String,
    /// The process id of the spawned job.
    pub pid: u32,
}

/// A plain acknowledgement, returned by `POST /admin/batch/stop` and
/// `POST /admin/index/reload`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}
