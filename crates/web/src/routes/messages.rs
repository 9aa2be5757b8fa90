//! Inbox route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
};
use philagri_core::UserId;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::CurrentContext;
use crate::queries::messages::format_time;
use crate::state::AppState;
use crate::views::Inbox;

use super::settle;
use super::shell::Shell;
use super::table::MESSAGES_PATH;

/// Sidebar entry for one conversation partner.
#[derive(Debug, Clone)]
pub struct ContactView {
    pub id: String,
    pub name: String,
    pub preview: String,
    pub unread_count: usize,
    pub selected: bool,
}

/// One bubble in the open conversation.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub content: String,
    pub time: String,
    /// Sent by the inbox owner.
    pub mine: bool,
}

/// Messages page template.
#[derive(Template, WebTemplate)]
#[template(path = "messages.html")]
pub struct MessagesTemplate {
    pub shell: Shell,
    pub contacts: Vec<ContactView>,
    pub selected_id: Option<String>,
    pub selected_name: Option<String>,
    pub conversation: Vec<MessageView>,
}

/// Selected conversation.
#[derive(Debug, Default, Deserialize)]
pub struct MessagesQuery {
    pub contact: Option<String>,
}

/// Message compose form.
#[derive(Debug, Deserialize)]
pub struct SendForm {
    pub to: String,
    #[serde(default)]
    pub content: String,
}

fn messages_page(inbox: &Inbox, requested: Option<&str>, shell: Shell) -> MessagesTemplate {
    let contacts = inbox.contacts();
    let selected = requested
        .and_then(|id| contacts.iter().find(|c| c.id == id))
        .or_else(|| contacts.first());

    let conversation = selected
        .map(|contact| {
            inbox
                .conversation(contact.id)
                .into_iter()
                .map(|m| MessageView {
                    content: m.content.clone(),
                    time: format_time(&m.timestamp),
                    mine: &m.sender_id == inbox.owner(),
                })
                .collect()
        })
        .unwrap_or_default();

    MessagesTemplate {
        shell,
        contacts: contacts
            .iter()
            .map(|c| ContactView {
                id: c.id.to_string(),
                name: c.name.to_owned(),
                preview: c.last_message.content.clone(),
                unread_count: c.unread_count,
                selected: selected.is_some_and(|s| s.id == c.id),
            })
            .collect(),
        selected_id: selected.map(|c| c.id.to_string()),
        selected_name: selected.map(|c| c.name.to_owned()),
        conversation,
    }
}

/// Display the inbox, optionally opened on one contact.
#[instrument(skip(current, state))]
pub async fn index(
    current: CurrentContext,
    State(state): State<AppState>,
    Query(query): Query<MessagesQuery>,
) -> MessagesTemplate {
    messages_page(
        &Inbox::from_store(state.store()),
        query.contact.as_deref(),
        Shell::new(&current.context, MESSAGES_PATH),
    )
}

/// Send a message to an existing contact and show the thread once.
#[instrument(skip(current, state, form))]
pub async fn send(
    current: CurrentContext,
    State(state): State<AppState>,
    Form(form): Form<SendForm>,
) -> Result<MessagesTemplate> {
    let to = UserId::new(form.to.trim());
    let now = chrono::Local::now().naive_local();
    let fresh = || Inbox::from_store(state.store());
    let (inbox, flash) = settle(fresh().send(&to, &form.content, now), fresh, || {
        "Message sent!".to_owned()
    })?;
    Ok(messages_page(
        &inbox,
        Some(to.as_str()),
        Shell::new(&current.context, MESSAGES_PATH).with_flash(flash),
    ))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::context::{AppContext, MemoryPreferences};
    use crate::store::EntityStore;

    fn shell(store: &EntityStore) -> Shell {
        let context = AppContext::from_preferences(store.user().clone(), &MemoryPreferences::new());
        Shell::new(&context, MESSAGES_PATH)
    }

    #[test]
    fn test_opens_first_contact_by_default() {
        let store = EntityStore::seed();
        let page = messages_page(&Inbox::from_store(&store), None, shell(&store));
        assert_eq!(page.selected_id.as_deref(), Some("s1"));
        assert_eq!(page.selected_name.as_deref(), Some("Gonzales Farm"));
        assert_eq!(page.conversation.len(), 3);
        assert_eq!(page.contacts.iter().filter(|c| c.selected).count(), 1);
    }

    #[test]
    fn test_sent_message_is_mine() {
        let store = EntityStore::seed();
        let at = NaiveDate::from_ymd_opt(2026, 2, 25)
            .and_then(|d| d.and_hms_opt(9, 5, 0))
            .unwrap_or_default();
        let inbox = Inbox::from_store(&store).send(&UserId::new("s1"), "On my way", at);
        assert!(inbox.is_ok());
        let inbox = inbox.unwrap_or_else(|_| Inbox::from_store(&store));

        let page = messages_page(&inbox, Some("s1"), shell(&store));
        let last = page.conversation.last();
        assert_eq!(last.map(|m| m.content.as_str()), Some("On my way"));
        assert_eq!(last.map(|m| m.time.as_str()), Some("09:05 AM"));
        assert!(last.is_some_and(|m| m.mine));
    }
}
