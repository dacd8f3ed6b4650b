use clusterstate_model::{Labels, Node, Taint, TaintEffect};

use crate::copy::{new_labels, new_taints};

/// Scheduler-side record of a node.
///
/// Labels and taints are copied on construction so later edits to the observed node (or to
/// this record) never leak across.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    pub name: String,
    pub labels: Labels,
    pub taints: Vec<Taint>,
    pub unschedulable: bool,
}

impl NodeInfo {
    pub fn new(node: &Node) -> Self {
        Self {
            name: node.name.clone(),
            labels: new_labels(Some(&node.labels)),
            taints: new_taints(Some(node.taints.as_slice())),
            unschedulable: node.unschedulable,
        }
    }

    /// Refresh labels and taints from a newer observation of the same node.
    pub fn set_node(&mut self, node: &Node) {
        self.labels = new_labels(Some(&node.labels));
        self.taints = new_taints(Some(node.taints.as_slice()));
        self.unschedulable = node.unschedulable;
    }

    pub fn is_tainted_with(&self, effect: TaintEffect) -> bool {
        self.taints.iter().any(|t| t.effect == effect)
    }
}
