//! Store error types for huddle-store.

use huddle_core::enums::EntityType;
use huddle_core::errors::CoreError;
use thiserror::Error;

/// Errors from store operations.
///
/// Read queries never return these; a lookup miss is `None` and a query over
/// an unknown project is empty.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A referenced record does not exist.
    #[error("Not found: {entity_type} {id}")]
    NotFound { entity_type: EntityType, id: String },

    /// A creation was rejected; nothing was recorded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A display name matched more than one member of a project.
    #[error("Ambiguous name '{name}' in project {project_id}: {count} members share it")]
    AmbiguousName {
        project_id: String,
        name: String,
        count: usize,
    },
}

impl StoreError {
    pub(crate) fn not_found(entity_type: EntityType, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }
}

impl From<CoreError> for StoreError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::InvalidInput(reason) => Self::InvalidInput(reason),
        }
    }
}
