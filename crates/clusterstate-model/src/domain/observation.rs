use crate::{Pod, PodPhase};

/// Snapshot of the signals the status classifier looks at.
///
/// Produced fresh for each reconciliation and discarded after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskObservation {
    pub phase: PodPhase,
    pub deletion_requested: bool,
    pub has_placement: bool,
}

impl TaskObservation {
    pub fn new(phase: impl Into<PodPhase>) -> Self {
        Self {
            phase: phase.into(),
            deletion_requested: false,
            has_placement: false,
        }
    }

    pub fn deleting(mut self) -> Self {
        self.deletion_requested = true;
        self
    }

    pub fn placed(mut self) -> Self {
        self.has_placement = true;
        self
    }
}

impl From<&Pod> for TaskObservation {
    fn from(pod: &Pod) -> Self {
        Self {
            phase: pod.phase.clone(),
            deletion_requested: pod.is_deleting(),
            has_placement: pod.assigned_node().is_some(),
        }
    }
}
