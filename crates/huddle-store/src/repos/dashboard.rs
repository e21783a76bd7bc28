//! Dashboard query: one summary card per project.

use huddle_core::views::ProjectSummary;

use crate::store::HuddleStore;

impl HuddleStore {
    /// Summaries of every project, in creation order.
    #[must_use]
    pub fn project_summaries(&self) -> Vec<ProjectSummary> {
        self.projects
            .iter()
            .map(|project| ProjectSummary {
                project: project.clone(),
                member_count: u32::try_from(project.members.len()).unwrap_or(u32::MAX),
                task_counts: self.task_counts(&project.id),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use huddle_core::enums::TaskStatus;

    use crate::inputs::NewTask;
    use crate::test_support::helpers::{codex_store, date};

    #[test]
    fn summaries_cover_every_project() {
        let (mut store, codex) = codex_store();
        let other = store
            .create_project("Launch", "", &["c@z.com", "d@z.com", "e@z.com"])
            .unwrap();
        store
            .create_task(
                NewTask::new(&codex.id, "Ship", &codex.members[0], date(2025, 4, 1))
                    .status(TaskStatus::Done),
            )
            .unwrap();

        let summaries = store.project_summaries();
        assert_eq!(summaries.len(), 2);

        assert_eq!(summaries[0].project.id, codex.id);
        assert_eq!(summaries[0].member_count, 2);
        assert_eq!(summaries[0].task_counts.done, 1);

        assert_eq!(summaries[1].project.id, other.id);
        assert_eq!(summaries[1].member_count, 3);
        assert_eq!(summaries[1].task_counts.total(), 0);
    }
}
