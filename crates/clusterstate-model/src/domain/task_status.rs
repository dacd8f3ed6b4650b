use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::ModelError;

/// Scheduler-owned status of a task.
///
/// Recomputed from the latest observation on every reconciliation; never advanced incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    /// Waiting to be placed on a node.
    Pending,
    /// Resources reserved by the scheduler, not yet bound.
    Allocated,
    /// Bind request sent to the API server.
    Binding,
    /// Assigned to a node, containers not yet running.
    Bound,
    /// Running on its node.
    Running,
    /// Deletion requested while the task was still active.
    Releasing,
    /// Completed successfully.
    Succeeded,
    /// Completed with a failure.
    Failed,
    /// State could not be determined.
    Unknown,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 9] = [
        TaskStatus::Pending,
        TaskStatus::Allocated,
        TaskStatus::Binding,
        TaskStatus::Bound,
        TaskStatus::Running,
        TaskStatus::Releasing,
        TaskStatus::Succeeded,
        TaskStatus::Failed,
        TaskStatus::Unknown,
    ];

    /// Returns `true` if a task in this status holds (or is acquiring) a resource reservation.
    ///
    /// Quota accounting relies on this exact set; `Unknown` and `Releasing` are not holding.
    pub fn is_allocated(&self) -> bool {
        matches!(
            self,
            TaskStatus::Bound | TaskStatus::Binding | TaskStatus::Running | TaskStatus::Allocated
        )
    }

    /// Returns `true` if the task has finished and will not change status again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Succeeded | TaskStatus::Failed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Allocated => "allocated",
            TaskStatus::Binding => "binding",
            TaskStatus::Bound => "bound",
            TaskStatus::Running => "running",
            TaskStatus::Releasing => "releasing",
            TaskStatus::Succeeded => "succeeded",
            TaskStatus::Failed => "failed",
            TaskStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase();
        TaskStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == norm)
            .ok_or_else(|| ModelError::InvalidTaskStatus(s.to_string()))
    }
}
