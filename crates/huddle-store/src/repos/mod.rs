//! Repository modules implementing store operations per entity.
//!
//! Each module adds methods to `HuddleStore` via `impl HuddleStore` blocks.

pub mod dashboard;
pub mod message;
pub mod project;
pub mod task;
pub mod user;
