//! Inbox with message sending.

use chrono::NaiveDateTime;
use philagri_core::{MessageId, UserId};

use super::ViewError;
use crate::models::Message;
use crate::queries::messages::{Contact, TIMESTAMP_FORMAT, contacts, conversation};
use crate::store::EntityStore;

/// Name shown on messages the demo account sends.
pub const SENDER_NAME: &str = "Demo User";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbox {
    owner: UserId,
    messages: Vec<Message>,
}

impl Inbox {
    /// The inbox of the store's current buyer.
    #[must_use]
    pub fn from_store(store: &EntityStore) -> Self {
        Self {
            owner: store.buyer_id().clone(),
            messages: store.messages().to_vec(),
        }
    }

    #[must_use]
    pub const fn owner(&self) -> &UserId {
        &self.owner
    }

    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    #[must_use]
    pub fn contacts(&self) -> Vec<Contact<'_>> {
        contacts(&self.messages, &self.owner)
    }

    #[must_use]
    pub fn conversation(&self, contact_id: &UserId) -> Vec<&Message> {
        conversation(&self.messages, contact_id)
    }

    /// Append an unread message from the owner to an existing contact.
    ///
    /// # Errors
    ///
    /// `Invalid` for blank content, `UnknownId` if `to` is not a contact.
    pub fn send(mut self, to: &UserId, content: &str, at: NaiveDateTime) -> Result<Self, ViewError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ViewError::Invalid("message is empty".to_owned()));
        }
        let receiver_name = self
            .contacts()
            .into_iter()
            .find(|c| c.id == to)
            .map(|c| c.name.to_owned())
            .ok_or_else(|| ViewError::unknown("contact", to.as_str()))?;

        let message = Message {
            id: MessageId::new(format!("m{}", self.messages.len() + 1)),
            sender_id: self.owner.clone(),
            sender_name: SENDER_NAME.to_owned(),
            receiver_id: to.clone(),
            receiver_name,
            content: content.to_owned(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            read: false,
        };
        tracing::debug!(message_id = %message.id, to = %to, "Message sent");
        self.messages.push(message);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 2, 25)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap_or_default()
    }

    fn inbox() -> Inbox {
        Inbox::from_store(&EntityStore::seed())
    }

    #[test]
    fn test_send_appends_numbered_message() {
        let seller = UserId::new("s1");
        let inbox = inbox().send(&seller, "  Is the rice still available?  ", noon());
        let last = inbox.as_ref().ok().and_then(|i| i.messages().last().cloned());

        let last = last.unwrap_or_else(|| panic!("message was not sent"));
        assert_eq!(last.id, "m4");
        assert_eq!(last.sender_name, "Demo User");
        assert_eq!(last.receiver_name, "Gonzales Farm");
        assert_eq!(last.content, "Is the rice still available?");
        assert_eq!(last.timestamp, "2026-02-25T12:00:00");
        assert!(!last.read);
    }

    #[test]
    fn test_sent_message_becomes_last_in_thread() {
        let seller = UserId::new("s1");
        let inbox = inbox().send(&seller, "Thanks!", noon());
        let last = inbox.as_ref().ok().and_then(|i| {
            i.contacts()
                .first()
                .map(|c| c.last_message.id.to_string())
        });
        assert_eq!(last.as_deref(), Some("m4"));
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let result = inbox().send(&UserId::new("s1"), "   ", noon());
        assert!(matches!(result, Err(ViewError::Invalid(_))));
    }

    #[test]
    fn test_unknown_contact_is_rejected() {
        let result = inbox().send(&UserId::new("s9"), "hello", noon());
        assert!(matches!(result, Err(ViewError::UnknownId { kind: "contact", .. })));
    }
}
