use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Projects => commands::projects::handle(ctx, flags),
        Commands::Project { action } => commands::project::handle(&action, ctx, flags),
        Commands::Task { action } => commands::task::handle(&action, ctx, flags),
        Commands::Chat { action } => commands::chat::handle(&action, ctx, flags),
        Commands::Whoami => commands::whoami::handle(ctx, flags),
    }
}
