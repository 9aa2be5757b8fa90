//! Inbox derivations: contacts and conversation threads.

use chrono::NaiveDateTime;
use philagri_core::UserId;

use crate::models::Message;

/// Timestamp layout used by seed and newly sent messages.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A conversation partner in the inbox sidebar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact<'a> {
    pub id: &'a UserId,
    pub name: &'a str,
    /// Last message exchanged with this contact, by list position.
    pub last_message: &'a Message,
    /// Messages in the thread still marked unread.
    pub unread_count: usize,
}

/// Distinct counterparts of `self_id`, in order of first appearance.
///
/// Only messages that `self_id` sent or received are considered. The last
/// message is the one appearing last in the list, not the latest timestamp.
#[must_use]
pub fn contacts<'a>(messages: &'a [Message], self_id: &UserId) -> Vec<Contact<'a>> {
    let mut found: Vec<Contact<'a>> = Vec::new();

    for message in messages.iter().filter(|m| m.involves(self_id)) {
        let (id, name) = if &message.sender_id == self_id {
            (&message.receiver_id, message.receiver_name.as_str())
        } else {
            (&message.sender_id, message.sender_name.as_str())
        };
        let unread = usize::from(!message.read);

        if let Some(contact) = found.iter_mut().find(|c| c.id == id) {
            contact.last_message = message;
            contact.unread_count += unread;
        } else {
            found.push(Contact {
                id,
                name,
                last_message: message,
                unread_count: unread,
            });
        }
    }

    found
}

/// Every message to or from `contact_id`, in list order.
#[must_use]
pub fn conversation<'a>(messages: &'a [Message], contact_id: &UserId) -> Vec<&'a Message> {
    messages.iter().filter(|m| m.involves(contact_id)).collect()
}

/// Unread messages addressed to `self_id`.
#[must_use]
pub fn unread_for(messages: &[Message], self_id: &UserId) -> usize {
    messages
        .iter()
        .filter(|m| &m.receiver_id == self_id && !m.read)
        .count()
}

/// Clock time for a message bubble (`10:30 AM`). Unparseable timestamps are
/// shown as stored.
#[must_use]
pub fn format_time(timestamp: &str) -> String {
    NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_or_else(
        |_| timestamp.to_owned(),
        |t| t.format("%I:%M %p").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;

    #[test]
    fn test_fixture_yields_single_contact() {
        let store = EntityStore::seed();
        let found = contacts(store.messages(), &UserId::new("b1"));

        assert_eq!(found.len(), 1);
        let contact = found.first().map(|c| {
            (
                c.id.as_str(),
                c.name,
                c.last_message.id.as_str(),
                c.unread_count,
            )
        });
        assert_eq!(contact, Some(("s1", "Gonzales Farm", "m3", 1)));
    }

    #[test]
    fn test_contacts_from_the_seller_side() {
        let store = EntityStore::seed();
        let found = contacts(store.messages(), &UserId::new("s1"));

        assert_eq!(found.len(), 1);
        let contact = found.first();
        assert_eq!(contact.map(|c| c.name), Some("Maria Santos"));
        // only m3 is unread
        assert_eq!(contact.map(|c| c.unread_count), Some(1));
    }

    #[test]
    fn test_unread_counts_the_whole_thread() {
        let store = EntityStore::seed();
        let mut messages = store.messages().to_vec();
        for m in &mut messages {
            m.read = false;
        }
        let found = contacts(&messages, &UserId::new("b1"));
        assert_eq!(found.first().map(|c| c.unread_count), Some(3));
    }

    #[test]
    fn test_last_message_follows_list_position_not_timestamp() {
        let store = EntityStore::seed();
        let mut messages = store.messages().to_vec();
        messages.swap(1, 2);
        let found = contacts(&messages, &UserId::new("b1"));
        assert_eq!(
            found.first().map(|c| c.last_message.id.as_str()),
            Some("m2")
        );
    }

    #[test]
    fn test_no_messages_means_no_contacts() {
        assert!(contacts(&[], &UserId::new("b1")).is_empty());
        let store = EntityStore::seed();
        assert!(contacts(store.messages(), &UserId::new("nobody")).is_empty());
    }

    #[test]
    fn test_conversation_and_unread() {
        let store = EntityStore::seed();
        let thread = conversation(store.messages(), &UserId::new("s1"));
        assert_eq!(thread.len(), 3);
        assert_eq!(unread_for(store.messages(), &UserId::new("s1")), 1);
        assert_eq!(unread_for(store.messages(), &UserId::new("b1")), 0);
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("2026-02-24T10:30:00"), "10:30 AM");
        assert_eq!(format_time("2026-02-24T13:05:00"), "01:05 PM");
        assert_eq!(format_time("yesterday"), "yesterday");
    }
}
