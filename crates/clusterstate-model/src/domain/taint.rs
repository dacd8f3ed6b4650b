use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::SystemTime};

use crate::ModelError;

/// Effect a node taint has on tasks that do not tolerate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaintEffect {
    /// New tasks are not placed on the node.
    NoSchedule,
    /// The scheduler tries to avoid the node.
    PreferNoSchedule,
    /// Running tasks are evicted as well.
    NoExecute,
}

impl TaintEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaintEffect::NoSchedule => "NoSchedule",
            TaintEffect::PreferNoSchedule => "PreferNoSchedule",
            TaintEffect::NoExecute => "NoExecute",
        }
    }
}

impl fmt::Display for TaintEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaintEffect {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "NoSchedule" => Ok(TaintEffect::NoSchedule),
            "PreferNoSchedule" => Ok(TaintEffect::PreferNoSchedule),
            "NoExecute" => Ok(TaintEffect::NoExecute),
            other => Err(ModelError::InvalidTaintEffect(other.to_string())),
        }
    }
}

/// Host-side marker that repels tasks from a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taint {
    pub key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    pub effect: TaintEffect,
    /// When the taint was applied (only tracked for `NoExecute`).
    #[serde(
        default,
        with = "crate::domain::time_serde",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_added: Option<SystemTime>,
}

impl Taint {
    pub fn new<K, V>(key: K, value: V, effect: TaintEffect) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
            effect,
            time_added: None,
        }
    }

    pub fn with_time_added(mut self, at: SystemTime) -> Self {
        self.time_added = Some(at);
        self
    }
}
