use clap::Subcommand;

use crate::cli::subcommands::{ChatCommands, ProjectCommands, TaskCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Dashboard: every project with member and task counts.
    Projects,
    /// Projects.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Project chat: group channel and private threads.
    Chat {
        #[command(subcommand)]
        action: ChatCommands,
    },
    /// Show the signed-in user.
    Whoami,
}
