use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::task::{Task, TaskId};

/// Ordered collection of tasks. Insertion order is display order.
///
/// Mutations report whether anything changed so callers only mirror the
/// snapshot when the collection actually moved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    last_issued: i64,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a store from already-validated tasks.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let last_issued = tasks.iter().map(|t| t.id.value()).max().unwrap_or(0);
        Self { tasks, last_issued }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn add_task(&mut self, text: &str) -> Option<TaskId> {
        self.add_task_at(text, Utc::now())
    }

    #[tracing::instrument(skip(self, text))]
    pub fn add_task_at(&mut self, text: &str, now: DateTime<Utc>) -> Option<TaskId> {
        if text.trim().is_empty() {
            debug!("empty task not added");
            return None;
        }

        let id = self.issue_id(now);
        let task = Task::new_pending(id, text)?;
        info!(task_id = %id, text = %task.text, "added task");
        self.tasks.push(task);
        Some(id)
    }

    #[tracing::instrument(skip(self), fields(task_id = %id))]
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            debug!("toggle ignored; task not found");
            return false;
        };

        *task = task.toggled();
        info!(completed = task.completed, "toggled task status");
        true
    }

    #[tracing::instrument(skip(self), fields(task_id = %id))]
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);

        if self.tasks.len() == before {
            debug!("remove ignored; task not found");
            return false;
        }

        info!(remaining = self.tasks.len(), "removed task");
        true
    }

    fn issue_id(&mut self, now: DateTime<Utc>) -> TaskId {
        let stamp = TaskId::from_timestamp(now).value();
        let next = if stamp > self.last_issued {
            stamp
        } else {
            self.last_issued + 1
        };
        self.last_issued = next;
        TaskId(next)
    }
}
