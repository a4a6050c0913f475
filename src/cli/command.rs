use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "Device contact list over a pluggable store")]
pub struct Cli {
    /// Storage choice (mem, json) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage_choice: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommand and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List contacts
    List,

    /// Add a new contact
    Add {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },

    /// Delete a listed contact by its exact name and number
    Delete {
        /// Contact name
        #[arg(long)]
        name: String,

        /// Contact phone number
        #[arg(long)]
        number: String,
    },
}
