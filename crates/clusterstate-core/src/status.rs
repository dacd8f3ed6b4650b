//! Classification of observed pod state into [`TaskStatus`].

use clusterstate_model::{Pod, PodPhase, TaskObservation, TaskStatus};

/// Derives the scheduler status of a task from its latest observation.
///
/// Deletion takes precedence over the phase while the pod is still active (`Pending`/`Running`).
/// Phases this layer does not recognize classify as `Unknown`.
pub fn task_status(obs: &TaskObservation) -> TaskStatus {
    match &obs.phase {
        phase if obs.deletion_requested && phase.is_active() => TaskStatus::Releasing,
        PodPhase::Running => TaskStatus::Running,
        PodPhase::Pending if obs.has_placement => TaskStatus::Bound,
        PodPhase::Pending => TaskStatus::Pending,
        PodPhase::Unknown => TaskStatus::Unknown,
        PodPhase::Succeeded => TaskStatus::Succeeded,
        PodPhase::Failed => TaskStatus::Failed,
        PodPhase::Other(_) => TaskStatus::Unknown,
    }
}

/// Shorthand for classifying a pod directly.
#[inline]
pub fn pod_status(pod: &Pod) -> TaskStatus {
    task_status(&TaskObservation::from(pod))
}

/// Returns `true` if a task in `status` holds a resource reservation.
#[inline]
pub fn allocated_status(status: TaskStatus) -> bool {
    status.is_allocated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    fn obs(phase: &str, deleting: bool, placed: bool) -> TaskObservation {
        TaskObservation {
            phase: PodPhase::from(phase),
            deletion_requested: deleting,
            has_placement: placed,
        }
    }

    #[test]
    fn deletion_dominates_active_phases() {
        for phase in ["Running", "Pending"] {
            for placed in [false, true] {
                assert_eq!(
                    task_status(&obs(phase, true, placed)),
                    TaskStatus::Releasing,
                    "phase={phase} placed={placed}"
                );
            }
        }
    }

    #[test]
    fn deletion_does_not_affect_finished_phases() {
        assert_eq!(task_status(&obs("Succeeded", true, true)), TaskStatus::Succeeded);
        assert_eq!(task_status(&obs("Failed", true, false)), TaskStatus::Failed);
        assert_eq!(task_status(&obs("Unknown", true, true)), TaskStatus::Unknown);
    }

    #[test]
    fn running_is_running_regardless_of_placement() {
        assert_eq!(task_status(&obs("Running", false, true)), TaskStatus::Running);
        assert_eq!(task_status(&obs("Running", false, false)), TaskStatus::Running);
    }

    #[test]
    fn pending_splits_on_placement() {
        assert_eq!(task_status(&obs("Pending", false, false)), TaskStatus::Pending);
        assert_eq!(task_status(&obs("Pending", false, true)), TaskStatus::Bound);
    }

    #[test]
    fn finished_phases_map_through() {
        assert_eq!(task_status(&obs("Succeeded", false, false)), TaskStatus::Succeeded);
        assert_eq!(task_status(&obs("Failed", false, true)), TaskStatus::Failed);
        assert_eq!(task_status(&obs("Unknown", false, false)), TaskStatus::Unknown);
    }

    #[test]
    fn unrecognized_phase_is_unknown() {
        for phase in ["", "Evicted", "running", "Terminating"] {
            for deleting in [false, true] {
                assert_eq!(task_status(&obs(phase, deleting, true)), TaskStatus::Unknown);
            }
        }
    }

    #[test]
    fn pod_status_reads_pod_fields() {
        let pending = Pod::new("ns", "p").with_phase("Pending");
        assert_eq!(pod_status(&pending), TaskStatus::Pending);

        let bound = pending.clone().with_node("node-1");
        assert_eq!(pod_status(&bound), TaskStatus::Bound);

        let releasing = bound.with_deletion(SystemTime::now());
        assert_eq!(pod_status(&releasing), TaskStatus::Releasing);

        let blank_node = Pod::new("ns", "p").with_phase("Pending").with_node("");
        assert_eq!(pod_status(&blank_node), TaskStatus::Pending);
    }

    #[test]
    fn allocated_status_matches_holding_set() {
        let holding: Vec<_> = TaskStatus::ALL
            .into_iter()
            .filter(|s| allocated_status(*s))
            .collect();
        assert_eq!(
            holding,
            vec![
                TaskStatus::Allocated,
                TaskStatus::Binding,
                TaskStatus::Bound,
                TaskStatus::Running,
            ]
        );
        assert!(!allocated_status(TaskStatus::Unknown));
    }
}
