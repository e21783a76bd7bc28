//! Input types for creation operations that take more than a few fields.

use chrono::NaiveDate;
use huddle_core::enums::TaskStatus;

/// Everything needed to create a task; the store assigns the ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assignee_id: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub project_id: String,
}

impl NewTask {
    /// A `To-Do` task with an empty description.
    #[must_use]
    pub fn new(
        project_id: impl Into<String>,
        title: impl Into<String>,
        assignee_id: impl Into<String>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            assignee_id: assignee_id.into(),
            due_date,
            status: TaskStatus::ToDo,
            project_id: project_id.into(),
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub const fn status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }
}
