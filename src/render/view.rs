//! View-model for the contact list.
//!
//! [`ContactListView::build`] is a pure mapping from stored contacts to what
//! the page shows. Text stays raw here; escaping happens when markup is
//! generated in [`super::html`].

use super::actions::ViewAction;
use crate::models::Contact;

/// Shown instead of an empty list.
pub const EMPTY_PLACEHOLDER: &str = "No contacts saved yet. Add your first contact.";

/// Prompt shown before a delete is dispatched.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this contact?";

/// Timestamp format for the "Created" line.
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One rendered contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactView {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// `None` when the contact has no phone; the line is omitted
    pub phone: Option<String>,
    /// `None` when the contact has no address; the line is omitted
    pub address: Option<String>,
    pub created: String,
    pub delete: ViewAction,
}

impl ContactView {
    pub fn from_contact(contact: &Contact) -> Self {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.is_empty());
        Self {
            id: contact.id,
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: non_empty(&contact.phone),
            address: non_empty(&contact.address),
            created: contact.created_at.format(CREATED_FORMAT).to_string(),
            delete: ViewAction::Delete { id: contact.id },
        }
    }
}

/// The whole list, or the placeholder when there is nothing to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactListView {
    Empty { placeholder: &'static str },
    Items(Vec<ContactView>),
}

impl ContactListView {
    /// Map contacts to views, preserving order.
    pub fn build(contacts: &[Contact]) -> Self {
        if contacts.is_empty() {
            return Self::Empty {
                placeholder: EMPTY_PLACEHOLDER,
            };
        }
        Self::Items(contacts.iter().map(ContactView::from_contact).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Empty { .. } => 0,
            Self::Items(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every action exposed by the view, in display order.
    pub fn actions(&self) -> Vec<ViewAction> {
        match self {
            Self::Empty { .. } => Vec::new(),
            Self::Items(items) => items.iter().map(|item| item.delete).collect(),
        }
    }
}
