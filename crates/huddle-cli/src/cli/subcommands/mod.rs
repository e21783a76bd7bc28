mod chat;
mod project;
mod task;

pub use chat::ChatCommands;
pub use project::ProjectCommands;
pub use task::{TaskCommands, TaskCreateArgs};
