//! Project repository: creation, lookup, and member resolution.

use chrono::Utc;

use huddle_core::entities::{Project, User};
use huddle_core::enums::EntityType;

use crate::error::StoreError;
use crate::store::HuddleStore;

impl HuddleStore {
    /// Create a project and one new user per non-empty member email.
    ///
    /// Each user's name is the local part of its email. Duplicate emails are
    /// kept: every entry becomes its own user. The project is dated today
    /// (UTC).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` for a blank title or a malformed
    /// email. Nothing is recorded on error.
    pub fn create_project<S: AsRef<str>>(
        &mut self,
        title: &str,
        description: &str,
        member_emails: &[S],
    ) -> Result<Project, StoreError> {
        let members = Self::check_new_project(title, member_emails)
            .inspect_err(|error| tracing::warn!(%error, title, "rejected project"))?;

        let member_ids = members
            .into_iter()
            .map(|user| self.register_user(user))
            .collect();

        let project = Project {
            id: self.next_id(EntityType::Project),
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            created_date: Utc::now().date_naive(),
            members: member_ids,
        };
        self.push_project(project.clone());

        tracing::debug!(
            project_id = %project.id,
            members = project.members.len(),
            "project created"
        );
        Ok(project)
    }

    /// Validate everything up front so a bad email cannot leave half the
    /// members registered. Returns one unregistered user per non-empty email.
    fn check_new_project<S: AsRef<str>>(
        title: &str,
        member_emails: &[S],
    ) -> Result<Vec<User>, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::InvalidInput("project title is blank".into()));
        }

        member_emails
            .iter()
            .map(|email| email.as_ref().trim())
            .filter(|email| !email.is_empty())
            .map(|email| User::from_email(String::new(), email).map_err(StoreError::from))
            .collect()
    }

    #[must_use]
    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.project_by_id(id)
    }

    /// Like [`Self::get_project`], for callers that treat a miss as an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no project has that ID.
    pub fn require_project(&self, id: &str) -> Result<&Project, StoreError> {
        self.project_by_id(id)
            .ok_or_else(|| StoreError::not_found(EntityType::Project, id))
    }

    /// All projects, in creation order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Members of a project as users, in member order. Empty for unknown projects.
    #[must_use]
    pub fn project_members(&self, project_id: &str) -> Vec<&User> {
        self.project_by_id(project_id)
            .map(|project| {
                project
                    .members
                    .iter()
                    .filter_map(|id| self.user_by_id(id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Members `viewer_id` can open a private thread with: everyone but the viewer.
    #[must_use]
    pub fn chat_partners(&self, project_id: &str, viewer_id: &str) -> Vec<&User> {
        self.project_members(project_id)
            .into_iter()
            .filter(|user| user.id != viewer_id)
            .collect()
    }

    /// Resolve a display name to the single project member carrying it.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` (project) if the project does not exist.
    /// - `StoreError::NotFound` (user) if no member has that name.
    /// - `StoreError::AmbiguousName` if several members share it.
    pub fn find_member_by_name(&self, project_id: &str, name: &str) -> Result<&User, StoreError> {
        self.require_project(project_id)?;
        let name = name.trim();
        let matches: Vec<&User> = self
            .project_members(project_id)
            .into_iter()
            .filter(|user| user.name == name)
            .collect();

        match matches.as_slice() {
            [user] => Ok(*user),
            [] => Err(StoreError::not_found(EntityType::User, name)),
            _ => Err(StoreError::AmbiguousName {
                project_id: project_id.to_string(),
                name: name.to_string(),
                count: matches.len(),
            }),
        }
    }
}
