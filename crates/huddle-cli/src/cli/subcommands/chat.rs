use clap::Subcommand;

/// Chat commands. The viewer is the signed-in user unless `--as` is given.
#[derive(Clone, Debug, Subcommand)]
pub enum ChatCommands {
    /// Show the group channel, or the private thread with one member.
    Show {
        project: String,
        /// Display name of the member whose private thread to show.
        #[arg(long = "with", value_name = "NAME")]
        with: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// List the members the viewer can message privately.
    Partners { project: String },
    /// Post to the group channel, or privately with `--to`.
    Send {
        project: String,
        #[arg(long)]
        body: String,
        /// Display name of the private recipient.
        #[arg(long, value_name = "NAME")]
        to: Option<String>,
    },
}
