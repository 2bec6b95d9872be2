use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of a task, derived from its creation time in milliseconds
/// since the Unix epoch.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl TaskId {
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        Self(at.timestamp_millis())
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Builds a pending task. Returns `None` when `text` trims to nothing.
    pub fn new_pending(id: TaskId, text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        Some(Self {
            id,
            text: text.to_string(),
            completed: false,
        })
    }

    pub fn toggled(&self) -> Self {
        Self {
            completed: !self.completed,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn new_pending_trims_and_rejects_blank_text() {
        let id = TaskId(1);
        let task = Task::new_pending(id, "  Buy milk \n").expect("task");
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);

        assert!(Task::new_pending(id, "").is_none());
        assert!(Task::new_pending(id, " \t ").is_none());
    }

    #[test]
    fn id_is_millisecond_timestamp() {
        let at = Utc
            .with_ymd_and_hms(2026, 10, 17, 8, 30, 0)
            .single()
            .expect("valid timestamp");
        assert_eq!(TaskId::from_timestamp(at).value(), at.timestamp_millis());
    }

    #[test]
    fn serializes_with_plain_number_id() {
        let task = Task {
            id: TaskId(1_760_000_000_000),
            text: "Stretch".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&task).expect("serialize");
        assert_eq!(
            json,
            r#"{"id":1760000000000,"text":"Stretch","completed":true}"#
        );
    }
}
