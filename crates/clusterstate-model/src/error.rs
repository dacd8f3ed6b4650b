use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid task status: {0}")]
    InvalidTaskStatus(String),
    #[error("invalid taint effect: {0} (expected: NoSchedule|PreferNoSchedule|NoExecute)")]
    InvalidTaintEffect(String),
}
