use std::env;
use std::fs::{self, OpenOptions};
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ContactStore, create_file_parent};
use crate::domain::contact::Contact;
use crate::errors::AppError;

pub const STORAGE_PATH_ENV_KEY: &str = "PHONEBOOK_STORAGE_PATH";
pub const DEFAULT_STORAGE_PATH: &str = "./.instance/phonebook.json";

pub const MIME_STRUCTURED_NAME: &str = "vnd.phonebook.cursor.item/name";
pub const MIME_PHONE: &str = "vnd.phonebook.cursor.item/phone_v2";
pub const PHONE_TYPE_MOBILE: i64 = 2;

/// One row of the provider's generic data table. Every fact about a contact
/// is a row keyed by `raw_contact_id` and discriminated by `mimetype`:
/// name rows carry the name in `data1`, phone rows carry the number in
/// `data1` and the phone type in `data2`. `display_name` is denormalized
/// onto every row of the contact, which is what makes the delete predicate
/// below able to touch non-phone rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRow {
    pub raw_contact_id: Uuid,

    pub mimetype: String,

    #[serde(default)]
    pub display_name: Option<String>,

    #[serde(default)]
    pub data1: Option<String>,

    #[serde(default)]
    pub data2: Option<i64>,
}

/// Appends one contact as a single batch: a structured-name row and a phone
/// row sharing a freshly minted raw-contact id. Callers are responsible for
/// persisting the whole row set in one write so the batch stays atomic.
pub fn batch_insert(rows: &mut Vec<DataRow>, name: &str, number: &str) {
    let raw_contact_id = Uuid::new_v4();

    rows.push(DataRow {
        raw_contact_id,
        mimetype: MIME_STRUCTURED_NAME.to_string(),
        display_name: Some(name.to_string()),
        data1: Some(name.to_string()),
        data2: None,
    });

    rows.push(DataRow {
        raw_contact_id,
        mimetype: MIME_PHONE.to_string(),
        display_name: Some(name.to_string()),
        data1: Some(number.to_string()),
        data2: Some(PHONE_TYPE_MOBILE),
    });
}

/// Removes every row matching `display_name = name AND data1 = number`.
/// The predicate runs over the whole data table, not just phone rows; a
/// name row only matches when the contact's name equals the number being
/// deleted, since name rows keep the name in `data1`.
pub fn delete_rows(rows: &mut Vec<DataRow>, name: &str, number: &str) -> usize {
    let before = rows.len();
    rows.retain(|row| {
        !(row.display_name.as_deref() == Some(name) && row.data1.as_deref() == Some(number))
    });
    before - rows.len()
}

/// Projects the phone rows into `(name, number)` pairs in table order.
/// Rows with a missing name or number are passed through with the field
/// empty rather than skipped.
pub fn phone_entries(rows: &[DataRow]) -> Vec<Contact> {
    rows.iter()
        .filter(|row| row.mimetype == MIME_PHONE)
        .map(|row| Contact {
            name: row.display_name.clone().unwrap_or_default(),
            number: row.data1.clone().unwrap_or_default(),
        })
        .collect()
}

/// JSON-file stand-in for the device address book. The whole row table is
/// read on every call and rewritten through a temp file plus rename, so an
/// insert batch lands all-or-nothing.
pub struct ProviderStore {
    pub medium: String,
    pub path: String,
}

impl ProviderStore {
    pub fn new() -> Result<Self, AppError> {
        Ok(Self {
            medium: "json".to_string(),
            path: env::var(STORAGE_PATH_ENV_KEY).unwrap_or(DEFAULT_STORAGE_PATH.to_string()),
        })
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            medium: "json".to_string(),
            path: path.into(),
        }
    }

    fn load_rows(&self) -> Result<Vec<DataRow>, AppError> {
        if !Path::new(&self.path).exists() {
            // First run, nothing persisted yet
            return Ok(Vec::new());
        }

        let mut file = OpenOptions::new().read(true).open(&self.path)?;

        let mut data = String::new();
        file.read_to_string(&mut data)?;

        // serde_json will give an error if data is empty
        if data.is_empty() {
            return Ok(Vec::new());
        }

        let rows: Vec<DataRow> = serde_json::from_str(&data)
            .map_err(|e| AppError::StoreUnavailable(format!("unreadable row table: {}", e)))?;
        Ok(rows)
    }

    fn save_rows(&self, rows: &[DataRow]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let tmp_path = format!("{}.tmp", self.path);
        fs::write(&tmp_path, serde_json::to_string_pretty(rows)?)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl ContactStore for ProviderStore {
    fn query_all(&self) -> Result<Vec<Contact>, AppError> {
        let rows = self.load_rows()?;
        Ok(phone_entries(&rows))
    }

    fn insert(&self, name: &str, number: &str) -> Result<(), AppError> {
        let mut rows = self.load_rows()?;
        batch_insert(&mut rows, name, number);
        self.save_rows(&rows)
    }

    fn delete_matching(&self, name: &str, number: &str) -> Result<usize, AppError> {
        let mut rows = self.load_rows()?;
        let matched = delete_rows(&mut rows, name, number);
        self.save_rows(&rows)?;
        Ok(matched)
    }

    fn medium(&self) -> &str {
        &self.medium
    }
}
