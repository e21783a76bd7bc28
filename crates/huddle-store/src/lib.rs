//! # huddle-store
//!
//! The in-memory domain store for Huddle: users, projects, tasks, and
//! project-scoped chat.
//!
//! [`HuddleStore`] owns every collection. Creation operations validate their
//! input, assign IDs, and append; read queries derive views (a project's
//! tasks, its group channel, a private thread) without mutating anything.
//! State lives for as long as the store value does.

pub mod error;
pub mod inputs;
pub mod repos;
mod seed;
pub mod store;
mod test_support;

pub use error::StoreError;
pub use inputs::NewTask;
pub use store::HuddleStore;
