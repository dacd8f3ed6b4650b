//! Task identity derived from `namespace/name`.

use thiserror::Error;
use tracing::debug;

use clusterstate_model::{Pod, TaskId};

/// Failure reported by a [`KeyFunc`] implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("cannot derive key for {namespace:?}/{name:?}: {reason}")]
    Invalid {
        namespace: String,
        name: String,
        reason: String,
    },
}

/// Formats the store key of a namespaced object.
pub trait KeyFunc {
    fn key(&self, namespace: &str, name: &str) -> Result<String, KeyError>;
}

impl<F> KeyFunc for F
where
    F: Fn(&str, &str) -> Result<String, KeyError>,
{
    fn key(&self, namespace: &str, name: &str) -> Result<String, KeyError> {
        self(namespace, name)
    }
}

/// The cluster-wide `namespace/name` key convention.
///
/// Cluster-scoped objects (empty namespace) are keyed by name alone. Names are not validated, so
/// this never fails: an empty namespace and name give the empty key.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetaNamespaceKey;

impl KeyFunc for MetaNamespaceKey {
    fn key(&self, namespace: &str, name: &str) -> Result<String, KeyError> {
        if namespace.is_empty() {
            return Ok(name.to_string());
        }
        Ok(format!("{namespace}/{name}"))
    }
}

/// Returns the task id of a pod using [`MetaNamespaceKey`].
pub fn pod_key(pod: &Pod) -> TaskId {
    pod_key_with(&MetaNamespaceKey, pod)
}

/// Returns the task id of a pod using a custom key function.
///
/// A failing key function never reaches the caller: the id falls back to `namespace/name`.
pub fn pod_key_with<K>(key_fn: &K, pod: &Pod) -> TaskId
where
    K: KeyFunc + ?Sized,
{
    match key_fn.key(&pod.namespace, &pod.name) {
        Ok(key) => TaskId::from(key),
        Err(e) => {
            debug!(
                target: "clusterstate::key",
                namespace = %pod.namespace,
                name = %pod.name,
                error = %e,
                "key function failed; composing task id directly"
            );
            TaskId::from(format!("{}/{}", pod.namespace, pod.name))
        }
    }
}
