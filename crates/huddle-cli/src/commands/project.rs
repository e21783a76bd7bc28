#[path = "project/create.rs"]
mod create;
#[path = "project/show.rs"]
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::context::AppContext;

/// Handle `huddle project`.
pub fn handle(
    action: &ProjectCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Show { id } => show::run(id, ctx, flags),
        ProjectCommands::Create {
            title,
            description,
            members,
        } => create::run(title, description, members, ctx, flags),
    }
}
