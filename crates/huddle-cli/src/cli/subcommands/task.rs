use chrono::NaiveDate;
use clap::{Args, Subcommand};
use huddle_core::enums::TaskStatus;

/// Task commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// List a project's tasks in creation order.
    List {
        project: String,
        #[arg(long)]
        status: Option<TaskStatus>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a task assigned to a project member.
    Create(TaskCreateArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TaskCreateArgs {
    pub project: String,
    #[arg(long)]
    pub title: String,
    #[arg(long, default_value = "")]
    pub description: String,
    /// Display name of the assignee.
    #[arg(long)]
    pub assignee: String,
    /// Due date, YYYY-MM-DD.
    #[arg(long)]
    pub due: NaiveDate,
    #[arg(long, default_value = "To-Do")]
    pub status: TaskStatus,
}
