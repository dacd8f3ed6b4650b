use clusterstate_model::{JobId, Labels, Pod, TaskId, TaskObservation, TaskStatus};

use crate::{copy::new_labels, key::pod_key, status::task_status};

/// Scheduler-side record of one task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInfo {
    pub id: TaskId,
    pub job: JobId,
    pub namespace: String,
    pub name: String,
    pub uid: String,
    pub node_name: Option<String>,
    pub status: TaskStatus,
    pub priority: i32,
    pub labels: Labels,
}

impl TaskInfo {
    /// Builds the record for a pod owned by `job`.
    ///
    /// The labels are copied so the record never aliases the observed pod.
    pub fn new(job: JobId, pod: &Pod) -> Self {
        Self {
            id: pod_key(pod),
            job,
            namespace: pod.namespace.clone(),
            name: pod.name.clone(),
            uid: pod.uid.clone(),
            node_name: pod.assigned_node().map(str::to_string),
            status: task_status(&TaskObservation::from(pod)),
            priority: pod.priority,
            labels: new_labels(Some(&pod.labels)),
        }
    }

    /// Reclassifies the task from a fresh observation of its pod.
    ///
    /// Returns the previous status.
    pub fn reclassify(&mut self, pod: &Pod) -> TaskStatus {
        let previous = self.status;
        self.status = task_status(&TaskObservation::from(pod));
        self.node_name = pod.assigned_node().map(str::to_string);
        previous
    }

    pub fn is_allocated(&self) -> bool {
        self.status.is_allocated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::SystemTime;

    #[test]
    fn new_task_info_classifies_pod() {
        let pod = Pod::new("team-a", "worker-1")
            .with_phase("Pending")
            .with_node("node-7")
            .with_label("role", "worker");

        let task = TaskInfo::new(JobId::from("team-a/job"), &pod);
        assert_eq!(task.id, TaskId::from("team-a/worker-1"));
        assert_eq!(task.status, TaskStatus::Bound);
        assert_eq!(task.node_name.as_deref(), Some("node-7"));
        assert!(task.is_allocated());
        assert_eq!(task.labels.get("role").map(String::as_str), Some("worker"));
    }

    #[test]
    fn task_labels_do_not_alias_pod() {
        let mut pod = Pod::new("ns", "p").with_label("a", "1");
        let task = TaskInfo::new(JobId::from("ns/j"), &pod);

        pod.labels.insert("a".into(), "2".into());
        assert_eq!(task.labels.get("a").map(String::as_str), Some("1"));
    }

    #[test]
    fn reclassify_replaces_status() {
        let pod = Pod::new("ns", "p").with_phase("Running").with_node("n1");
        let mut task = TaskInfo::new(JobId::from("ns/j"), &pod);
        assert_eq!(task.status, TaskStatus::Running);

        let deleting = pod.with_deletion(SystemTime::now());
        let previous = task.reclassify(&deleting);
        assert_eq!(previous, TaskStatus::Running);
        assert_eq!(task.status, TaskStatus::Releasing);
        assert!(!task.is_allocated());
    }
}
