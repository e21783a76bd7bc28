//! Workspace bootstrap configuration: what the store starts with.

use serde::{Deserialize, Serialize};

const fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceConfig {
    /// Load the built-in sample workspace when the store is created.
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,

    /// Email of the user to sign in as. Empty keeps the sample workspace's
    /// signed-in user (or nobody, when seeding is off).
    #[serde(default)]
    pub current_user_email: String,
}

impl WorkspaceConfig {
    /// The configured sign-in email, if one is set.
    #[must_use]
    pub fn current_user_email(&self) -> Option<&str> {
        let email = self.current_user_email.trim();
        (!email.is_empty()).then_some(email)
    }
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed(),
            current_user_email: String::new(),
        }
    }
}
