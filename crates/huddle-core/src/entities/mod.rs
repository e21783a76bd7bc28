//! Entity structs for all Huddle domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation. Relationships are carried as entity IDs;
//! display names are resolved by the store's view queries.

mod message;
mod project;
mod task;
mod user;

pub use message::ChatMessage;
pub use project::Project;
pub use task::Task;
pub use user::{User, email_local_part};
