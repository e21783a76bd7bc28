pub mod chat;
pub mod dispatch;
pub mod project;
pub mod projects;
pub mod shared;
pub mod task;
pub mod whoami;
