use huddle_core::enums::TaskStatus;
use huddle_core::views::TaskView;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    project_id: &str,
    status: Option<TaskStatus>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let tasks = select(ctx, project_id, status, limit)?;
    output(&tasks, flags.format)
}

fn select(
    ctx: &AppContext,
    project_id: &str,
    status: Option<TaskStatus>,
    limit: u32,
) -> anyhow::Result<Vec<TaskView>> {
    let mut tasks = ctx.store.task_views(project_id);
    if let Some(status) = status {
        tasks.retain(|view| view.task.status == status);
    }
    tasks.truncate(usize::try_from(limit)?);
    Ok(tasks)
}
