pub mod memory;
pub mod provider;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use dotenv::dotenv;
use std::fs;
use std::path::Path;

/// Boundary to the device address book. Implementations persist through a
/// provider-style data table (see `provider::DataRow`); callers only see
/// `(name, number)` pairs.
pub trait ContactStore {
    /// Full scan of phone entries in store order. No pagination; entries
    /// missing a name or number come through as-is rather than erroring.
    fn query_all(&self) -> Result<Vec<Contact>, AppError>;

    /// One atomic write: a raw-contact record plus its structured-name row
    /// plus its phone row (type mobile). All-or-nothing.
    fn insert(&self, name: &str, number: &str) -> Result<(), AppError>;

    /// Deletes every data row whose display-name and value columns both
    /// match exactly, returning the matched count.
    fn delete_matching(&self, name: &str, number: &str) -> Result<usize, AppError>;

    fn medium(&self) -> &str;
}

#[derive(Debug)]
pub enum StorageMediums {
    Mem,
    Json,
}

impl StorageMediums {
    pub fn is_json(&self) -> bool {
        matches!(self, StorageMediums::Json)
    }

    pub fn is_mem(&self) -> bool {
        matches!(self, StorageMediums::Mem)
    }

    pub fn is_which(&self) -> &str {
        if self.is_json() { "json" } else { "mem" }
    }

    pub fn from(str: &str) -> Result<Self, AppError> {
        match str {
            "json" => Ok(StorageMediums::Json),
            "mem" => Ok(StorageMediums::Mem),
            _ => Err(AppError::Validation(
                "Not a recognized storage medium".to_string(),
            )),
        }
    }
}

pub fn parse_store() -> Result<Box<dyn ContactStore>, AppError> {
    dotenv().ok();

    let choice = std::env::var("STORAGE_CHOICE").unwrap_or("json".to_string());

    match StorageMediums::from(&choice)? {
        StorageMediums::Json => Ok(Box::new(provider::ProviderStore::new()?)),
        StorageMediums::Mem => Ok(Box::new(memory::MemStore::new())),
    }
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
