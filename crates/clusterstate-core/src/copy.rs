//! Defensive copies of caller-owned collections.
//!
//! Records absorb labels and taints through these helpers so that they never share storage with
//! the observed object they were built from.

use clusterstate_model::{Labels, Taint};

/// Returns an independent copy of `source`; an absent source yields an empty map.
pub fn new_labels(source: Option<&Labels>) -> Labels {
    let mut target = Labels::with_capacity(source.map_or(0, Labels::len));
    if let Some(source) = source {
        for (k, v) in source {
            target.insert(k.clone(), v.clone());
        }
    }
    target
}

/// Returns an independent copy of `source`; an absent source yields an empty list.
///
/// Each taint is rebuilt field by field and order is preserved.
pub fn new_taints(source: Option<&[Taint]>) -> Vec<Taint> {
    let Some(source) = source else {
        return Vec::new();
    };

    let mut target = Vec::with_capacity(source.len());
    for t in source {
        target.push(Taint {
            key: t.key.clone(),
            value: t.value.clone(),
            effect: t.effect,
            time_added: t.time_added,
        });
    }
    target
}
