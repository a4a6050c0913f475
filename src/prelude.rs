pub use crate::auth::{EnvGate, Grant, Permission, PermissionGate};
pub use crate::cli::{command, run_app};
pub use crate::domain::{
    contact::Contact,
    phonebook::{Notice, Phonebook},
};
pub use crate::errors::AppError;
pub use crate::store::{
    self, ContactStore, StorageMediums, memory::MemStore, parse_store, provider,
    provider::ProviderStore,
};
