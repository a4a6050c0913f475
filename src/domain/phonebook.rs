use core::fmt;

use crate::auth::{Grant, Permission, PermissionGate};
use crate::domain::contact::Contact;
use crate::store::ContactStore;

/// Outcome of one phonebook operation, surfaced to the user as a transient
/// notification. Failures are non-fatal; the session continues with
/// whatever in-memory state the operation left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Loaded(usize),
    LoadFailed(String),
    PermissionDenied,
    Saved,
    SaveFailed(String),
    Deleted,
    DeleteFailed(String),
}

impl Notice {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Notice::LoadFailed(_)
                | Notice::PermissionDenied
                | Notice::SaveFailed(_)
                | Notice::DeleteFailed(_)
        )
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Loaded(n) => write!(f, "Loaded {} contacts", n),
            Notice::LoadFailed(_) => write!(f, "Failed to load contacts"),
            Notice::PermissionDenied => write!(f, "Permission denied. Cannot load contacts."),
            Notice::Saved => write!(f, "Contact saved"),
            Notice::SaveFailed(detail) => write!(f, "Failed to save contact: {}", detail),
            Notice::Deleted => write!(f, "Contact deleted"),
            Notice::DeleteFailed(detail) => write!(f, "Error deleting contact: {}", detail),
        }
    }
}

/// The one stateful component: an ordered in-memory mirror of the store,
/// mutated in lockstep with it. Each operation runs to completion on the
/// control thread before the next event is handled, so a mutation and its
/// store call never interleave with another operation's.
pub struct Phonebook {
    contacts: Vec<Contact>,
    store: Box<dyn ContactStore>,
}

impl Phonebook {
    pub fn new(store: Box<dyn ContactStore>) -> Self {
        Self {
            contacts: Vec::new(),
            store,
        }
    }

    /// Asks the host for read access, then loads. A denial leaves the list
    /// empty for the rest of the session; only a fresh `initialize` (a new
    /// session) can recover.
    pub fn initialize(&mut self, gate: &dyn PermissionGate) -> Notice {
        match gate.request(Permission::ReadContacts) {
            Grant::Granted => self.load(),
            Grant::Denied => Notice::PermissionDenied,
        }
    }

    /// Replaces the list with the store's phone entries in store order.
    /// On failure the prior list is kept as-is.
    pub fn load(&mut self) -> Notice {
        match self.store.query_all() {
            Ok(entries) => {
                let count = entries.len();
                self.contacts = entries;
                Notice::Loaded(count)
            }
            Err(err) => {
                log::error!("contact query failed: {}", err);
                Notice::LoadFailed(err.to_string())
            }
        }
    }

    /// Optimistic add: the entry is appended before the store write, and a
    /// failed write does not take it back out. Callers have already checked
    /// that both fields are non-empty; nothing else is validated and
    /// identical pairs stack up as duplicates.
    pub fn add(&mut self, name: &str, number: &str) -> Notice {
        self.contacts.push(Contact::new(name, number));

        match self.store.insert(name, number) {
            Ok(()) => Notice::Saved,
            Err(err) => {
                log::error!("contact insert failed: {}", err);
                Notice::SaveFailed(err.to_string())
            }
        }
    }

    /// Deletes from the store first, then drops the first in-memory
    /// occurrence. The store may have matched zero or many rows; memory
    /// still loses exactly one entry. A failed store call leaves the list
    /// untouched.
    pub fn delete(&mut self, contact: &Contact) -> Notice {
        match self.store.delete_matching(&contact.name, &contact.number) {
            Ok(_matched) => {
                if let Some(index) = self.contacts.iter().position(|c| c == contact) {
                    self.contacts.remove(index);
                }
                Notice::Deleted
            }
            Err(err) => {
                log::error!("contact delete failed: {}", err);
                Notice::DeleteFailed(err.to_string())
            }
        }
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// First entry matching the pair, if any. Used by callers to satisfy
    /// the delete precondition that the contact is actually listed.
    pub fn find(&self, name: &str, number: &str) -> Option<Contact> {
        self.contacts
            .iter()
            .find(|c| c.name == name && c.number == number)
            .cloned()
    }

    pub fn medium(&self) -> &str {
        self.store.medium()
    }
}
