use thiserror::Error;

use clusterstate_model::{JobId, TaskId};

use crate::MergedError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("task {task} already present in job {job}")]
    TaskExists { job: JobId, task: TaskId },

    #[error("task {task} not found in job {job}")]
    TaskNotFound { job: JobId, task: TaskId },

    #[error("task {task} belongs to job {owner}, not {job}")]
    ForeignTask {
        job: JobId,
        owner: JobId,
        task: TaskId,
    },

    #[error("{0}")]
    Batch(#[from] MergedError),
}
