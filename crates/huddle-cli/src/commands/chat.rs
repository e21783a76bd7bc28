#[path = "chat/partners.rs"]
mod partners;
#[path = "chat/send.rs"]
mod send;
#[path = "chat/show.rs"]
mod show;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ChatCommands;
use crate::context::AppContext;

/// Handle `huddle chat`.
pub fn handle(action: &ChatCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let acting_as = flags.acting_as.as_deref();
    match action {
        ChatCommands::Show {
            project,
            with,
            limit,
        } => show::run(project, with.as_deref(), *limit, acting_as, ctx, flags),
        ChatCommands::Partners { project } => partners::run(project, acting_as, ctx, flags),
        ChatCommands::Send { project, body, to } => {
            send::run(project, body, to.as_deref(), acting_as, ctx, flags)
        }
    }
}
