#[path = "task/create.rs"]
mod create;
#[path = "task/list.rs"]
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

/// Handle `huddle task`.
pub fn handle(action: &TaskCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TaskCommands::List {
            project,
            status,
            limit,
        } => list::run(project, *status, *limit, ctx, flags),
        TaskCommands::Create(args) => create::run(args, ctx, flags),
    }
}
