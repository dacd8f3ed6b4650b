//! Classifies a snapshot of observed pods into a job record.
//!
//! Usage: `reconcile [snapshot.json]` (reads stdin when no path is given).
//!
//! ```json
//! {
//!   "job": "team-a/train",
//!   "spec": { "minAvailable": 2 },
//!   "pods": [
//!     { "namespace": "team-a", "name": "w0", "phase": "Running", "nodeName": "node-1" },
//!     { "namespace": "team-a", "name": "w1", "phase": "Pending" }
//!   ]
//! }
//! ```
use std::io::Read;

use anyhow::Context;
use serde::Deserialize;
use tracing::{info, warn};

use clusterstate_core::{JobInfo, TaskInfo, merge_errors};
use clusterstate_model::{JobId, Pod, SchedulingSpec};
use clusterstate_observe::{LoggerConfig, logger_init};

#[derive(Debug, Deserialize)]
struct Snapshot {
    job: JobId,
    #[serde(default)]
    spec: Option<SchedulingSpec>,
    #[serde(default)]
    pods: Vec<Pod>,
}

fn read_snapshot(path: Option<&str>) -> anyhow::Result<Snapshot> {
    let raw = match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading snapshot {path}"))?
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading snapshot from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("parsing snapshot")
}

fn main() -> anyhow::Result<()> {
    let cfg = LoggerConfig::from_env()?;
    logger_init(&cfg)?;

    let path = std::env::args().nth(1);
    let snapshot = read_snapshot(path.as_deref())?;

    let mut job = JobInfo::new(snapshot.job.clone());
    if let Some(spec) = snapshot.spec {
        job.set_sched_spec(spec);
    }

    let results: Vec<_> = snapshot
        .pods
        .iter()
        .map(|pod| job.add_task_info(TaskInfo::new(snapshot.job.clone(), pod)))
        .collect();
    if let Err(e) = merge_errors(results) {
        warn!(job = %job.id(), failed = e.len(), "some pods were not absorbed: {e}");
    }

    let mut tasks: Vec<_> = job.tasks().collect();
    tasks.sort_by(|a, b| a.id.cmp(&b.id));
    for task in tasks {
        println!(
            "{}\t{}\tallocated={}",
            task.id,
            task.status,
            task.is_allocated()
        );
    }

    info!(
        job = %job.id(),
        tasks = job.task_count(),
        allocated = job.allocated_count(),
        terminated = job.is_terminated(),
        "snapshot classified"
    );
    Ok(())
}
