use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A person who can be a project member, task assignee, or chat participant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: String,
    /// Display name. Not unique: two users may share one.
    pub name: String,
    pub email: String,
}

impl User {
    /// Build a user whose display name is the local part of `email`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if the email has no `@` or nothing
    /// before it.
    pub fn from_email(id: String, email: &str) -> Result<Self, CoreError> {
        let email = email.trim();
        let name = email_local_part(email)?.to_string();
        Ok(Self {
            id,
            name,
            email: email.to_string(),
        })
    }
}

/// The part of an email address before the first `@`.
///
/// # Errors
///
/// Returns `CoreError::InvalidInput` for addresses without `@` or with an
/// empty local part.
pub fn email_local_part(email: &str) -> Result<&str, CoreError> {
    match email.split_once('@') {
        Some((local, _)) if !local.trim().is_empty() => Ok(local.trim()),
        Some(_) => Err(CoreError::InvalidInput(format!(
            "email '{email}' has an empty local part"
        ))),
        None => Err(CoreError::InvalidInput(format!(
            "email '{email}' is missing '@'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_local_part() {
        let user = User::from_email("usr-00000001".into(), " a@x.com ").unwrap();
        assert_eq!(user.name, "a");
        assert_eq!(user.email, "a@x.com");
    }

    #[test]
    fn local_part_stops_at_first_at_sign() {
        assert_eq!(email_local_part("first.last@team@corp").unwrap(), "first.last");
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(email_local_part("no-at-sign").is_err());
        assert!(email_local_part("@x.com").is_err());
    }
}
