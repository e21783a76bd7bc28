//! ID prefixes and the monotonic ID generator.
//!
//! IDs look like `prj-0000002a`: an entity prefix and a per-prefix counter in
//! eight lowercase hex digits. Counters only move forward, so two records
//! created in the same instant still get distinct IDs and no ID is reused.

use crate::enums::EntityType;

pub const PREFIX_USER: &str = "usr";
pub const PREFIX_PROJECT: &str = "prj";
pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_MESSAGE: &str = "msg";

/// ID prefix for an entity type.
#[must_use]
pub const fn prefix_for(entity: EntityType) -> &'static str {
    match entity {
        EntityType::User => PREFIX_USER,
        EntityType::Project => PREFIX_PROJECT,
        EntityType::Task => PREFIX_TASK,
        EntityType::Message => PREFIX_MESSAGE,
    }
}

/// Format a prefixed ID, e.g. `format_id("tsk", 26)` → `"tsk-0000001a"`.
#[must_use]
pub fn format_id(prefix: &str, n: u64) -> String {
    format!("{prefix}-{n:08x}")
}

/// Hands out IDs for every entity type from independent counters.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    users: u64,
    projects: u64,
    tasks: u64,
    messages: u64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the counter for `entity` and return the new ID.
    pub fn next(&mut self, entity: EntityType) -> String {
        let counter = match entity {
            EntityType::User => &mut self.users,
            EntityType::Project => &mut self.projects,
            EntityType::Task => &mut self.tasks,
            EntityType::Message => &mut self.messages,
        };
        *counter += 1;
        format_id(prefix_for(entity), *counter)
    }
}
