//! Chat repository: posting messages and the group / private views.

use chrono::{DateTime, Utc};

use huddle_core::entities::ChatMessage;
use huddle_core::enums::EntityType;
use huddle_core::views::MessageView;

use crate::error::StoreError;
use crate::store::HuddleStore;

impl HuddleStore {
    /// Post a message to a project's group channel, or privately to one
    /// member when `recipient_id` is set. Timestamped now (UTC).
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidInput` if the body is blank, the project
    /// does not exist, the sender or recipient is not a project member, or
    /// the recipient is the sender.
    pub fn create_message(
        &mut self,
        sender_id: &str,
        body: &str,
        project_id: &str,
        recipient_id: Option<&str>,
    ) -> Result<ChatMessage, StoreError> {
        self.record_message(sender_id, body, project_id, recipient_id, Utc::now())
    }

    pub(crate) fn record_message(
        &mut self,
        sender_id: &str,
        body: &str,
        project_id: &str,
        recipient_id: Option<&str>,
        sent_at: DateTime<Utc>,
    ) -> Result<ChatMessage, StoreError> {
        self.check_new_message(sender_id, body, project_id, recipient_id)
            .inspect_err(|error| tracing::warn!(%error, project_id, sender_id, "rejected message"))?;

        let message = ChatMessage {
            id: self.next_id(EntityType::Message),
            project_id: project_id.to_string(),
            sender_id: sender_id.to_string(),
            body: body.trim().to_string(),
            sent_at,
            recipient_id: recipient_id.map(String::from),
        };
        self.messages.push(message.clone());

        tracing::debug!(
            message_id = %message.id,
            project_id,
            private = recipient_id.is_some(),
            "message posted"
        );
        Ok(message)
    }

    fn check_new_message(
        &self,
        sender_id: &str,
        body: &str,
        project_id: &str,
        recipient_id: Option<&str>,
    ) -> Result<(), StoreError> {
        if body.trim().is_empty() {
            return Err(StoreError::InvalidInput("message body is blank".into()));
        }
        let Some(project) = self.project_by_id(project_id) else {
            return Err(StoreError::InvalidInput(format!(
                "unknown project {project_id}"
            )));
        };
        if !project.has_member(sender_id) {
            return Err(StoreError::InvalidInput(format!(
                "sender {sender_id} is not a member of project {project_id}"
            )));
        }
        if let Some(recipient) = recipient_id {
            if recipient == sender_id {
                return Err(StoreError::InvalidInput(
                    "a private message needs a recipient other than the sender".into(),
                ));
            }
            if !project.has_member(recipient) {
                return Err(StoreError::InvalidInput(format!(
                    "recipient {recipient} is not a member of project {project_id}"
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn get_message(&self, id: &str) -> Option<&ChatMessage> {
        self.messages.iter().find(|message| message.id == id)
    }

    /// Every message of a project, group and private, in posting order.
    #[must_use]
    pub fn messages_for_project(&self, project_id: &str) -> Vec<&ChatMessage> {
        self.messages
            .iter()
            .filter(|message| message.project_id == project_id)
            .collect()
    }

    /// The project's group channel: messages without a recipient.
    #[must_use]
    pub fn group_messages(&self, project_id: &str) -> Vec<&ChatMessage> {
        self.messages_for_project(project_id)
            .into_iter()
            .filter(|message| message.is_group())
            .collect()
    }

    /// The private thread between `viewer_id` and `counterpart_id`, both directions.
    #[must_use]
    pub fn private_thread(
        &self,
        project_id: &str,
        viewer_id: &str,
        counterpart_id: &str,
    ) -> Vec<&ChatMessage> {
        self.messages_for_project(project_id)
            .into_iter()
            .filter(|message| message.in_thread(viewer_id, counterpart_id))
            .collect()
    }

    /// Attach sender and recipient display names.
    #[must_use]
    pub fn message_views(&self, messages: &[&ChatMessage]) -> Vec<MessageView> {
        messages
            .iter()
            .map(|message| MessageView {
                message: (*message).clone(),
                sender_name: self.display_name(&message.sender_id).map(String::from),
                recipient_name: message
                    .recipient_id
                    .as_deref()
                    .and_then(|id| self.display_name(id))
                    .map(String::from),
            })
            .collect()
    }
}
