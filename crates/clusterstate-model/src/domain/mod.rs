use std::collections::HashMap;

mod ids;
pub use ids::{JobId, TaskId};

mod task_status;
pub use task_status::TaskStatus;

mod pod_phase;
pub use pod_phase::PodPhase;

mod taint;
pub use taint::{Taint, TaintEffect};

mod pod;
pub use pod::Pod;

mod node;
pub use node::Node;

mod observation;
pub use observation::TaskObservation;

mod sched_spec;
pub use sched_spec::SchedulingSpec;

pub(crate) mod time_serde;

/// String labels attached to pods and nodes.
///
/// Keys are unique and iteration order is irrelevant.
pub type Labels = HashMap<String, String>;
