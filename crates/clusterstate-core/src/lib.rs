//! State derivation for the cluster scheduler.
//!
//! Turns observed pod state into scheduler-owned task statuses, decides when a job aggregate has
//! drained, and offers the small helpers the controller needs around that: stable task keys,
//! batch error folding and defensive copies of labels and taints.

pub mod error;
pub use error::CoreError;

pub mod key;
pub use key::{KeyError, KeyFunc, MetaNamespaceKey, pod_key, pod_key_with};

pub mod status;
pub use status::{allocated_status, pod_status, task_status};

pub mod merge;
pub use merge::{Failure, MergedError, merge_errors};

pub mod copy;
pub use copy::{new_labels, new_taints};

mod task;
pub use task::TaskInfo;

mod job;
pub use job::{JobInfo, job_terminated};

mod node;
pub use node::NodeInfo;

#[cfg(test)]
mod tests {
    use super::*;
    use clusterstate_model::{Node, Pod, Taint, TaskObservation, TaskStatus};

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<JobInfo>();
        assert_send_sync::<TaskInfo>();
        assert_send_sync::<NodeInfo>();
        assert_send_sync::<MergedError>();
        assert_send_sync::<Failure>();
        assert_send_sync::<KeyError>();
        assert_send_sync::<CoreError>();
        assert_send_sync::<MetaNamespaceKey>();
        assert_send_sync::<TaskObservation>();
        assert_send_sync::<TaskStatus>();
        assert_send_sync::<Taint>();
        assert_send_sync::<Pod>();
        assert_send_sync::<Node>();
    }
}
