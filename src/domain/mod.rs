pub mod contact;
pub mod phonebook;
