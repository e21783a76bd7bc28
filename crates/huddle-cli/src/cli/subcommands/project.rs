use clap::Subcommand;

/// Project commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProjectCommands {
    /// Show a project with its members and task counts.
    Show { id: String },
    /// Create a project. One member is added per email.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long = "member", value_name = "EMAIL")]
        members: Vec<String>,
    },
}
