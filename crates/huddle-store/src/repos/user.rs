//! User lookups and the signed-in user.

use huddle_core::entities::User;
use huddle_core::enums::EntityType;

use crate::error::StoreError;
use crate::store::HuddleStore;

impl HuddleStore {
    /// Store `user` under a fresh ID, replacing whatever `id` it carries.
    pub(crate) fn register_user(&mut self, user: User) -> String {
        let id = self.next_id(EntityType::User);
        self.push_user(User {
            id: id.clone(),
            ..user
        });
        id
    }

    #[must_use]
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.user_by_id(id)
    }

    /// All users, in creation order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// First user registered with `email`, compared case-insensitively.
    #[must_use]
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        let email = email.trim();
        self.users
            .iter()
            .find(|user| user.email.eq_ignore_ascii_case(email))
    }

    /// Display name for a user ID, if the user exists.
    #[must_use]
    pub fn display_name(&self, id: &str) -> Option<&str> {
        self.user_by_id(id).map(|user| user.name.as_str())
    }

    /// The signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        self.current_user
            .as_deref()
            .and_then(|id| self.user_by_id(id))
    }

    /// Sign in as `user_id`, or sign out with `None`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no user has that ID.
    pub fn set_current_user(&mut self, user_id: Option<&str>) -> Result<(), StoreError> {
        match user_id {
            Some(id) => {
                if self.user_by_id(id).is_none() {
                    return Err(StoreError::not_found(EntityType::User, id));
                }
                tracing::debug!(user_id = id, "signed in");
                self.current_user = Some(id.to_string());
            }
            None => {
                tracing::debug!("signed out");
                self.current_user = None;
            }
        }
        Ok(())
    }
}
