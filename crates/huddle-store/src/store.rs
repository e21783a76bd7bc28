//! The store value and its bootstrap paths.
//!
//! `HuddleStore` holds the collections, the lookup tables, and the ID
//! generator. Operations are implemented as `impl HuddleStore` blocks in
//! the `repos` modules.

use std::collections::HashMap;

use huddle_config::WorkspaceConfig;
use huddle_core::entities::{ChatMessage, Project, Task, User};
use huddle_core::enums::EntityType;
use huddle_core::ids::IdGenerator;

use crate::error::StoreError;
use crate::seed;

/// Owns every Huddle collection for the lifetime of the value.
///
/// Collections are append-only. Users and projects are indexed by ID since
/// tasks and messages join against them; tasks and messages are scanned.
#[derive(Debug, Default)]
pub struct HuddleStore {
    ids: IdGenerator,
    pub(crate) users: Vec<User>,
    pub(crate) projects: Vec<Project>,
    pub(crate) tasks: Vec<Task>,
    pub(crate) messages: Vec<ChatMessage>,
    user_index: HashMap<String, usize>,
    project_index: HashMap<String, usize>,
    pub(crate) current_user: Option<String>,
}

impl HuddleStore {
    /// An empty store with nobody signed in.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the built-in sample workspace.
    #[must_use]
    pub fn with_sample_data() -> Self {
        let mut store = Self::new();
        seed::load_sample_workspace(&mut store);
        store
    }

    /// Build a store as described by the workspace configuration.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if `current_user_email` is set but no
    /// user has that email.
    pub fn from_config(config: &WorkspaceConfig) -> Result<Self, StoreError> {
        let mut store = if config.seed_sample_data {
            Self::with_sample_data()
        } else {
            Self::new()
        };

        if let Some(email) = config.current_user_email() {
            let user_id = store
                .find_user_by_email(email)
                .map(|user| user.id.clone())
                .ok_or_else(|| StoreError::not_found(EntityType::User, email))?;
            store.set_current_user(Some(&user_id))?;
        }

        tracing::debug!(
            seeded = config.seed_sample_data,
            projects = store.projects.len(),
            users = store.users.len(),
            "store initialized"
        );
        Ok(store)
    }

    pub(crate) fn next_id(&mut self, entity: EntityType) -> String {
        self.ids.next(entity)
    }

    pub(crate) fn push_user(&mut self, user: User) {
        self.user_index.insert(user.id.clone(), self.users.len());
        self.users.push(user);
    }

    pub(crate) fn push_project(&mut self, project: Project) {
        self.project_index
            .insert(project.id.clone(), self.projects.len());
        self.projects.push(project);
    }

    pub(crate) fn user_by_id(&self, id: &str) -> Option<&User> {
        self.user_index.get(id).map(|&idx| &self.users[idx])
    }

    pub(crate) fn project_by_id(&self, id: &str) -> Option<&Project> {
        self.project_index.get(id).map(|&idx| &self.projects[idx])
    }
}
