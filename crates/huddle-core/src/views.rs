//! Derived view types returned by store queries.
//!
//! These are projections over stored entities: nothing here is stored, and
//! every field can be recomputed from the collections.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChatMessage, Project, Task};
use crate::enums::TaskStatus;

/// Per-status task counts for one project.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskCounts {
    pub to_do: u32,
    pub in_progress: u32,
    pub done: u32,
}

impl TaskCounts {
    pub const fn record(&mut self, status: TaskStatus) {
        match status {
            TaskStatus::ToDo => self.to_do += 1,
            TaskStatus::InProgress => self.in_progress += 1,
            TaskStatus::Done => self.done += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u32 {
        self.to_do + self.in_progress + self.done
    }
}

impl<'a> FromIterator<&'a Task> for TaskCounts {
    fn from_iter<I: IntoIterator<Item = &'a Task>>(iter: I) -> Self {
        let mut counts = Self::default();
        for task in iter {
            counts.record(task.status);
        }
        counts
    }
}

/// One dashboard card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub member_count: u32,
    pub task_counts: TaskCounts,
}

/// A task with its assignee's display name resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskView {
    #[serde(flatten)]
    pub task: Task,
    pub assignee_name: Option<String>,
}

/// A chat message with sender and recipient display names resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageView {
    #[serde(flatten)]
    pub message: ChatMessage,
    pub sender_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient_name: Option<String>,
}
