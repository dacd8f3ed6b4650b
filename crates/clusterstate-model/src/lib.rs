//! Plain data types shared by the cluster state layer.
//!
//! Everything here is an owned value: observed objects (pods, nodes, taints) as they arrive from the
//! API server, and the scheduler-owned vocabulary derived from them (task ids, task statuses).

mod error;
pub use error::ModelError;

mod domain;
pub use domain::*;
