use std::cell::Cell;

use rusty_phonebook::prelude::*;

/// Mock store with a scripted query outcome
struct MockStorage {
    contacts: Vec<Contact>,
    fail_query: bool,
}

impl MockStorage {
    fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            fail_query: false,
        }
    }

    fn unavailable() -> Self {
        Self {
            contacts: Vec::new(),
            fail_query: true,
        }
    }
}

impl ContactStore for MockStorage {
    fn query_all(&self) -> Result<Vec<Contact>, AppError> {
        if self.fail_query {
            return Err(AppError::StoreUnavailable("no cursor".to_string()));
        }
        Ok(self.contacts.clone())
    }

    fn insert(&self, _name: &str, _number: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn delete_matching(&self, _name: &str, _number: &str) -> Result<usize, AppError> {
        Ok(0)
    }

    fn medium(&self) -> &str {
        "mock"
    }
}

/// Store whose query starts working and then goes away, for checking that
/// a failed reload keeps the previous list
struct FlakyStorage {
    contacts: Vec<Contact>,
    queries: Cell<usize>,
}

impl ContactStore for FlakyStorage {
    fn query_all(&self) -> Result<Vec<Contact>, AppError> {
        self.queries.set(self.queries.get() + 1);
        if self.queries.get() > 1 {
            return Err(AppError::StoreUnavailable("no cursor".to_string()));
        }
        Ok(self.contacts.clone())
    }

    fn insert(&self, _name: &str, _number: &str) -> Result<(), AppError> {
        Ok(())
    }

    fn delete_matching(&self, _name: &str, _number: &str) -> Result<usize, AppError> {
        Ok(0)
    }

    fn medium(&self) -> &str {
        "flaky"
    }
}

struct Granting;

impl PermissionGate for Granting {
    fn request(&self, _permission: Permission) -> Grant {
        Grant::Granted
    }
}

struct Denying;

impl PermissionGate for Denying {
    fn request(&self, _permission: Permission) -> Grant {
        Grant::Denied
    }
}

#[test]
fn initialize_granted_mirrors_store_order() {
    let records = vec![
        Contact::new("Charlie", "333"),
        Contact::new("Ann", "111"),
        Contact::new("Ben", "222"),
    ];
    let mut book = Phonebook::new(Box::new(MockStorage::new(records.clone())));

    let notice = book.initialize(&Granting);

    assert_eq!(notice, Notice::Loaded(3));
    // Store iteration order, not sorted
    assert_eq!(book.contacts(), records.as_slice());
}

#[test]
fn initialize_denied_leaves_list_empty() {
    let records = vec![Contact::new("Ann", "111")];
    let mut book = Phonebook::new(Box::new(MockStorage::new(records)));

    let notice = book.initialize(&Denying);

    assert_eq!(notice, Notice::PermissionDenied);
    assert!(book.contacts().is_empty());
}

#[test]
fn load_failure_on_first_run_stays_empty() {
    let mut book = Phonebook::new(Box::new(MockStorage::unavailable()));

    let notice = book.initialize(&Granting);

    assert!(matches!(notice, Notice::LoadFailed(_)));
    assert!(book.contacts().is_empty());
}

#[test]
fn failed_reload_keeps_previous_list() {
    let records = vec![Contact::new("Ann", "111"), Contact::new("Ben", "222")];
    let mut book = Phonebook::new(Box::new(FlakyStorage {
        contacts: records.clone(),
        queries: Cell::new(0),
    }));

    assert_eq!(book.load(), Notice::Loaded(2));

    let notice = book.load();

    assert!(matches!(notice, Notice::LoadFailed(_)));
    assert_eq!(book.contacts(), records.as_slice());
}

#[test]
fn unsanitized_entries_pass_through() {
    // A record with a blank name is listed as-is, not dropped
    let records = vec![Contact::new("", "555"), Contact::new("Ann", "")];
    let mut book = Phonebook::new(Box::new(MockStorage::new(records.clone())));

    assert_eq!(book.initialize(&Granting), Notice::Loaded(2));
    assert_eq!(book.contacts(), records.as_slice());
}
