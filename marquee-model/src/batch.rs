//! Batch job data models.

use chrono::NaiveDateTime;

use serde::{Deserialize, Serialize};

/// The state of the rating statistics batch job.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Serialize)]
#[serde(from = "String", into = "String")]
pub enum BatchState {
    /// No job has run, or the last one was cleaned up.
    Idle,
    /// A job is in progress.
    Running,
    /// The last job finished successfully.
    Completed,
    /// The last job failed or its process exited unexpectedly.
    Failed,
    /// The last job was stopped by an operator.
    Stopped,
    /// Any other state reported by the server.
    Other(String),
}

impl BatchState {
    /// Checks if the state is [`BatchState::Running`].
    pub fn is_running(&self) -> bool {
        matches!(self, BatchState::Running)
    }

    pub fn as_str(&self) -> &str {
        match self {
            BatchState::Idle => "idle",
            BatchState::Running => "running",
            BatchState::Completed => "completed",
            BatchState::Failed => "failed",
            BatchState::Stopped => "stopped",
            BatchState::Other(other) => other.as_str(),
        }
    }
}

impl From<String> for BatchState {
    fn from(value: String) -> Self {
        match value.as_str() {
            "idle" => BatchState::Idle,
            "running" => BatchState::Running,
            "completed" => BatchState::Completed,
            "failed" => BatchState::Failed,
            "stopped" => BatchState::Stopped,
            _ => BatchState::Other(value),
        }
    }
}

impl From<BatchState> for String {
    fn from(value: BatchState) -> Self {
        match value {
            BatchState::Other(other) => other,
            state => state.as_str().to_owned(),
        }
    }
}

/// A response from `GET /admin/batch/status`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BatchStatus {
    /// The job's state.
    pub status: BatchState,
    /// Completion percentage, from `0` to `100`.
    #[serde(default)]
    pub progress: u32,
    /// A human readable description of what the job is doing.
    #[serde(default)]
    pub message: String,
    /// When the job last reported its status.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// A response from `GET /admin/batch/logs`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize)]
pub struct BatchLogs {
    /// The raw log output of the last job.
    pub logs: String,
}

impl BatchLogs {
    /// Iterates over the individual log lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.logs.lines()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_status_without_timestamp() {
        let status: BatchStatus = serde_json::from_str(
            r#"{"status": "idle", "progress": 0, "message": "not running", "updated_at": null}"#,
        )
        .unwrap();

        assert_eq!(status.status, BatchState::Idle);
        assert!(!status.status.is_running());
        assert!(status.updated_at.is_none());
    }

    #[test]
    fn running_status_with_iso_timestamp() {
        let status: BatchStatus = serde_json::from_str(
            r#"{"status": "running", "progress": 50, "message": "connecting", "updated_at": "2025-03-01T12:30:05.123456"}"#,
        )
        .unwrap();

        assert!(status.status.is_running());
        assert_eq!(status.progress, 50);
        assert_eq!(
            status.updated_at.map(|at| at.to_string()).as_deref(),
            Some("2025-03-01 12:30:05.123456")
        );
    }

    #[test]
    fn unknown_state_is_preserved() {
        let status: BatchStatus =
            serde_json::from_str(r#"{"status": "paused", "progress": 10}"#).unwrap();

        assert_eq!(status.status, BatchState::Other("paused".into()));
        assert_eq!(
            serde_json::to_value(&status).unwrap()["status"],
            serde_json::json!("paused")
        );
    }

    #[test]
    fn logs_split_into_lines() {
        let logs = BatchLogs {
            logs: "reading data\ncomputing stats\n".into(),
        };

        assert_eq!(logs.lines().collect::<Vec<_>>(), ["reading data", "computing stats"]);
    }
}
