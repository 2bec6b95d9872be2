use std::cell::RefCell;
use std::collections::BTreeSet;

use anyhow::Context;
use tracing::{debug, error, info, warn};

use crate::store::TaskStore;
use crate::task::Task;

/// Key of the single slot holding the serialized task list.
pub const TASKS_STORAGE_KEY: &str = "tasks";

/// A single durable key-value slot holding the serialized task list.
pub trait SnapshotSlot {
    fn read(&self) -> anyhow::Result<Option<String>>;

    fn write(&self, value: &str) -> anyhow::Result<()>;
}

/// Slot kept in process memory.
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: RefCell<Option<String>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: RefCell::new(Some(value.into())),
        }
    }

    pub fn value(&self) -> Option<String> {
        self.value.borrow().clone()
    }
}

impl SnapshotSlot for MemorySlot {
    fn read(&self) -> anyhow::Result<Option<String>> {
        Ok(self.value())
    }

    fn write(&self, value: &str) -> anyhow::Result<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

pub fn encode_tasks(tasks: &[Task]) -> anyhow::Result<String> {
    serde_json::to_string(tasks).context("failed to serialize task snapshot")
}

pub fn decode_tasks(raw: &str) -> anyhow::Result<Vec<Task>> {
    serde_json::from_str(raw).context("failed to parse task snapshot")
}

/// Reads the slot once and seeds a store from it.
///
/// Unreadable or malformed snapshots yield an empty store. Blank entries
/// and repeated ids are dropped so seeded data keeps the task invariants.
#[tracing::instrument(skip(slot))]
pub fn load_tasks(slot: &dyn SnapshotSlot) -> TaskStore {
    let raw = match slot.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("no saved tasks; starting empty");
            return TaskStore::new();
        }
        Err(error) => {
            error!(%error, "failed reading saved tasks");
            return TaskStore::new();
        }
    };

    let decoded = match decode_tasks(&raw) {
        Ok(tasks) => tasks,
        Err(error) => {
            error!(%error, "failed parsing saved tasks; starting empty");
            return TaskStore::new();
        }
    };

    let total = decoded.len();
    let mut seen = BTreeSet::new();
    let tasks: Vec<Task> = decoded
        .into_iter()
        .filter_map(|task| {
            let mut clean = Task::new_pending(task.id, &task.text)?;
            clean.completed = task.completed;
            Some(clean)
        })
        .filter(|task| seen.insert(task.id))
        .collect();

    if tasks.len() != total {
        warn!(
            dropped = total - tasks.len(),
            "discarded invalid saved tasks"
        );
    }
    info!(count = tasks.len(), "loaded saved tasks");

    TaskStore::from_tasks(tasks)
}

/// Overwrites the slot with the full task list.
pub fn persist_tasks(slot: &dyn SnapshotSlot, store: &TaskStore) -> anyhow::Result<()> {
    let json = encode_tasks(store.tasks())?;
    slot.write(&json).context("failed to write task snapshot")
}

/// Like [`persist_tasks`], but logs a failure instead of returning it so the
/// in-memory list keeps working when storage does not.
pub fn mirror_tasks(slot: &dyn SnapshotSlot, store: &TaskStore) -> bool {
    match persist_tasks(slot, store) {
        Ok(()) => {
            debug!(count = store.len(), "tasks saved to storage");
            true
        }
        Err(error) => {
            error!(error = %format!("{error:#}"), "failed saving tasks");
            false
        }
    }
}
