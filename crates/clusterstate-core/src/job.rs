use std::collections::{HashMap, HashSet};

use tracing::trace;

use clusterstate_model::{JobId, Pod, SchedulingSpec, TaskId, TaskStatus};

use crate::{error::CoreError, key::pod_key, merge::merge_errors, task::TaskInfo};

/// Scheduler-side aggregate of a job and its tasks.
///
/// The controller owns and synchronizes it; the status index is kept in step with every mutation.
#[derive(Debug, Clone, Default)]
pub struct JobInfo {
    id: JobId,
    sched_spec: Option<SchedulingSpec>,
    tasks: HashMap<TaskId, TaskInfo>,
    /// Index: status -> ids of the tasks currently in that status.
    status_index: HashMap<TaskStatus, HashSet<TaskId>>,
}

impl JobInfo {
    /// Create a job with no scheduling spec and no tasks.
    pub fn new(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_spec(mut self, spec: SchedulingSpec) -> Self {
        self.sched_spec = Some(spec);
        self
    }

    pub fn id(&self) -> &JobId {
        &self.id
    }

    pub fn sched_spec(&self) -> Option<&SchedulingSpec> {
        self.sched_spec.as_ref()
    }

    pub fn set_sched_spec(&mut self, spec: SchedulingSpec) {
        self.sched_spec = Some(spec);
    }

    /// Drops the scheduling spec, returning the previous one.
    pub fn clear_sched_spec(&mut self) -> Option<SchedulingSpec> {
        self.sched_spec.take()
    }

    pub fn tasks(&self) -> impl Iterator<Item = &TaskInfo> {
        self.tasks.values()
    }

    pub fn task(&self, id: &TaskId) -> Option<&TaskInfo> {
        self.tasks.get(id)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn has_tasks(&self) -> bool {
        !self.tasks.is_empty()
    }

    /// Register a task record with this job.
    pub fn add_task_info(&mut self, task: TaskInfo) -> Result<(), CoreError> {
        if task.job != self.id {
            return Err(CoreError::ForeignTask {
                job: self.id.clone(),
                owner: task.job,
                task: task.id,
            });
        }
        if self.tasks.contains_key(&task.id) {
            return Err(CoreError::TaskExists {
                job: self.id.clone(),
                task: task.id,
            });
        }

        self.status_index
            .entry(task.status)
            .or_default()
            .insert(task.id.clone());
        self.tasks.insert(task.id.clone(), task);
        Ok(())
    }

    /// Remove a task record, returning it.
    pub fn delete_task_info(&mut self, id: &TaskId) -> Result<TaskInfo, CoreError> {
        let task = self.tasks.remove(id).ok_or_else(|| CoreError::TaskNotFound {
            job: self.id.clone(),
            task: id.clone(),
        })?;
        self.unindex(task.status, id);
        Ok(task)
    }

    /// Remove several task records; every id is attempted and the failures are reported together.
    pub fn delete_tasks<'a, I>(&mut self, ids: I) -> Result<(), CoreError>
    where
        I: IntoIterator<Item = &'a TaskId>,
    {
        let results: Vec<_> = ids
            .into_iter()
            .map(|id| self.delete_task_info(id))
            .collect();
        merge_errors(results)?;
        Ok(())
    }

    /// Overwrite the status of a task, returning its previous status.
    pub fn update_task_status(
        &mut self,
        id: &TaskId,
        status: TaskStatus,
    ) -> Result<TaskStatus, CoreError> {
        let task = self.tasks.get_mut(id).ok_or_else(|| CoreError::TaskNotFound {
            job: self.id.clone(),
            task: id.clone(),
        })?;

        let previous = task.status;
        task.status = status;
        if previous != status {
            self.unindex(previous, id);
            self.status_index
                .entry(status)
                .or_default()
                .insert(id.clone());
        }
        Ok(previous)
    }

    /// Reclassify the task backing `pod` from its latest observation.
    ///
    /// Returns the new status.
    pub fn observe_pod(&mut self, pod: &Pod) -> Result<TaskStatus, CoreError> {
        let id = pod_key(pod);
        let task = self.tasks.get_mut(&id).ok_or_else(|| CoreError::TaskNotFound {
            job: self.id.clone(),
            task: id.clone(),
        })?;

        let previous = task.reclassify(pod);
        let status = task.status;
        if previous != status {
            self.unindex(previous, &id);
            self.status_index.entry(status).or_default().insert(id);
        }
        Ok(status)
    }

    /// Tasks currently in `status`.
    pub fn tasks_with_status(&self, status: TaskStatus) -> impl Iterator<Item = &TaskInfo> {
        self.status_index
            .get(&status)
            .into_iter()
            .flatten()
            .filter_map(|id| self.tasks.get(id))
    }

    /// Number of tasks holding a resource reservation.
    pub fn allocated_count(&self) -> usize {
        self.status_index
            .iter()
            .filter(|(status, _)| status.is_allocated())
            .map(|(_, ids)| ids.len())
            .sum()
    }

    pub fn is_terminated(&self) -> bool {
        job_terminated(self)
    }

    fn unindex(&mut self, status: TaskStatus, id: &TaskId) {
        if let Some(ids) = self.status_index.get_mut(&status) {
            ids.remove(id);
            if ids.is_empty() {
                self.status_index.remove(&status);
            }
        }
    }

    fn status_summary(&self) -> Vec<(TaskStatus, usize)> {
        let mut summary: Vec<_> = self
            .status_index
            .iter()
            .map(|(status, ids)| (*status, ids.len()))
            .collect();
        summary.sort_by_key(|(status, _)| status.as_str());
        summary
    }
}

/// Returns `true` once a job has neither a scheduling spec nor any task left.
///
/// A job with a spec and no tasks has not started yet; a job without a spec still has to wait for
/// its leftover tasks to be removed.
pub fn job_terminated(job: &JobInfo) -> bool {
    if job.sched_spec.is_none() && job.tasks.is_empty() {
        trace!(target: "clusterstate::job", job = %job.id, "job is terminated");
        true
    } else {
        trace!(
            target: "clusterstate::job",
            job = %job.id,
            spec = ?job.sched_spec,
            tasks = job.tasks.len(),
            statuses = ?job.status_summary(),
            "job is not terminated"
        );
        false
    }
}
