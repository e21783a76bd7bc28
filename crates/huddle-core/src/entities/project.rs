use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A collaboration workspace with an ordered member list.
///
/// Tasks and messages point at a project by ID; the project itself holds no
/// back-references.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub created_date: NaiveDate,
    /// Member user IDs, in the order they were added.
    pub members: Vec<String>,
}

impl Project {
    #[must_use]
    pub fn has_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|member| member == user_id)
    }
}
