use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use crate::{Labels, PodPhase};

/// Observed state of a pod, as far as the scheduler cares about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pod {
    #[serde(default)]
    pub namespace: String,
    pub name: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub phase: PodPhase,
    /// Set by the API server once deletion of the pod has been requested.
    #[serde(
        default,
        with = "crate::domain::time_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub deletion_timestamp: Option<SystemTime>,
    /// Node the pod is bound to; `None` or empty while unplaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_name: Option<String>,
    #[serde(default, skip_serializing_if = "Labels::is_empty")]
    pub labels: Labels,
    #[serde(default)]
    pub priority: i32,
}

impl Pod {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_phase(mut self, phase: impl Into<PodPhase>) -> Self {
        self.phase = phase.into();
        self
    }

    pub fn with_node(mut self, node: impl Into<String>) -> Self {
        self.node_name = Some(node.into());
        self
    }

    pub fn with_deletion(mut self, at: SystemTime) -> Self {
        self.deletion_timestamp = Some(at);
        self
    }

    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Returns the assigned node, treating an empty name as unassigned.
    pub fn assigned_node(&self) -> Option<&str> {
        self.node_name.as_deref().filter(|n| !n.is_empty())
    }

    pub fn is_deleting(&self) -> bool {
        self.deletion_timestamp.is_some()
    }
}
