use huddle_core::views::TaskView;
use huddle_store::NewTask;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCreateArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &TaskCreateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let assignee = ctx.store.find_member_by_name(&args.project, &args.assignee)?;
    let assignee_id = assignee.id.clone();
    let assignee_name = assignee.name.clone();

    let new = NewTask::new(&args.project, &args.title, assignee_id, args.due)
        .description(&args.description)
        .status(args.status);
    let task = ctx.store.create_task(new)?;

    output(
        &TaskView {
            task,
            assignee_name: Some(assignee_name),
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use huddle_core::enums::TaskStatus;

    use crate::cli::subcommands::TaskCreateArgs;
    use crate::test_support::helpers::{codex_context, codex_project_id, flags};

    fn args(project: &str, assignee: &str) -> TaskCreateArgs {
        TaskCreateArgs {
            project: project.to_string(),
            title: "Wire up login".to_string(),
            description: String::new(),
            assignee: assignee.to_string(),
            due: NaiveDate::from_ymd_opt(2025, 10, 15).expect("valid date"),
            status: TaskStatus::InProgress,
        }
    }

    #[test]
    fn assigns_member_by_display_name() {
        let mut ctx = codex_context();
        let project_id = codex_project_id(&ctx);
        let before = ctx.store.tasks_for_project(&project_id).len();
        super::run(&args(&project_id, "Surya Kumar"), &mut ctx, &flags(None))
            .expect("task should be created");

        let tasks = ctx.store.task_views(&project_id);
        assert_eq!(tasks.len(), before + 1);
        let created = tasks.last().expect("new task");
        assert_eq!(created.task.title, "Wire up login");
        assert_eq!(created.assignee_name.as_deref(), Some("Surya Kumar"));
        assert_eq!(created.task.status, TaskStatus::InProgress);
    }

    #[test]
    fn unknown_assignee_records_nothing() {
        let mut ctx = codex_context();
        let project_id = codex_project_id(&ctx);
        let before = ctx.store.tasks_for_project(&project_id).len();
        super::run(&args(&project_id, "Nobody"), &mut ctx, &flags(None))
            .expect_err("unknown assignee");
        assert_eq!(ctx.store.tasks_for_project(&project_id).len(), before);
    }
}
