//! Task repository: creation and per-project queries.

use huddle_core::entities::Task;
use huddle_core::enums::EntityType;
use huddle_core::views::{TaskCounts, TaskView};

use crate::error::StoreError;
use crate::inputs::NewTask;
use crate::store::HuddleStore;

impl HuddleStore {
    /// Create a task in an existing project, assigned to one of its members.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the title is blank, the project
    /// does not exist, or the assignee is not a member of the project.
    pub fn create_task(&mut self, new: NewTask) -> Result<Task, StoreError> {
        self.check_new_task(&new)
            .inspect_err(|error| tracing::warn!(%error, project_id = %new.project_id, "rejected task"))?;

        let task = Task {
            id: self.next_id(EntityType::Task),
            project_id: new.project_id,
            title: new.title.trim().to_string(),
            description: new.description.trim().to_string(),
            assignee_id: new.assignee_id,
            due_date: new.due_date,
            status: new.status,
        };
        self.tasks.push(task.clone());

        tracing::debug!(
            task_id = %task.id,
            project_id = %task.project_id,
            status = %task.status,
            "task created"
        );
        Ok(task)
    }

    fn check_new_task(&self, new: &NewTask) -> Result<(), StoreError> {
        if new.title.trim().is_empty() {
            return Err(StoreError::InvalidInput("task title is blank".into()));
        }
        let Some(project) = self.project_by_id(&new.project_id) else {
            return Err(StoreError::InvalidInput(format!(
                "unknown project {}",
                new.project_id
            )));
        };
        if !project.has_member(&new.assignee_id) {
            return Err(StoreError::InvalidInput(format!(
                "assignee {} is not a member of project {}",
                new.assignee_id, project.id
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks created in `project_id`, in creation order. Empty for unknown projects.
    #[must_use]
    pub fn tasks_for_project(&self, project_id: &str) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|task| task.project_id == project_id)
            .collect()
    }

    /// Tasks of a project with assignee names resolved.
    #[must_use]
    pub fn task_views(&self, project_id: &str) -> Vec<TaskView> {
        self.tasks_for_project(project_id)
            .into_iter()
            .map(|task| TaskView {
                task: task.clone(),
                assignee_name: self.display_name(&task.assignee_id).map(String::from),
            })
            .collect()
    }

    /// Per-status task counts for a project.
    #[must_use]
    pub fn task_counts(&self, project_id: &str) -> TaskCounts {
        self.tasks_for_project(project_id).into_iter().collect()
    }
}
