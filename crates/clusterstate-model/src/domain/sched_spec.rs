use serde::{Deserialize, Serialize};

/// Gang scheduling intent attached to a job while it is admitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchedulingSpec {
    /// Minimum number of tasks that must be placed together.
    #[serde(default)]
    pub min_available: u32,
}

impl SchedulingSpec {
    pub fn new(min_available: u32) -> Self {
        Self { min_available }
    }
}
