use std::cell::RefCell;

use super::ContactStore;
use super::provider::{DataRow, batch_insert, delete_rows, phone_entries};
use crate::domain::contact::Contact;
use crate::errors::AppError;

/// In-process row table with the same semantics as the file-backed store.
/// RefCell interior mutability keeps the trait's `&self` methods workable
/// on the single control thread.
pub struct MemStore {
    pub medium: String,
    rows: RefCell<Vec<DataRow>>,
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            medium: "mem".to_string(),
            rows: RefCell::new(Vec::new()),
        }
    }

    /// Prepopulates the table, one batch per `(name, number)` pair.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (name, number) in entries {
            let mut rows = store.rows.borrow_mut();
            batch_insert(&mut rows, name, number);
        }
        store
    }

    pub fn row_count(&self) -> usize {
        self.rows.borrow().len()
    }
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactStore for MemStore {
    fn query_all(&self) -> Result<Vec<Contact>, AppError> {
        Ok(phone_entries(&self.rows.borrow()))
    }

    fn insert(&self, name: &str, number: &str) -> Result<(), AppError> {
        let mut rows = self.rows.borrow_mut();
        batch_insert(&mut rows, name, number);
        Ok(())
    }

    fn delete_matching(&self, name: &str, number: &str) -> Result<usize, AppError> {
        let mut rows = self.rows.borrow_mut();
        Ok(delete_rows(&mut rows, name, number))
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}
