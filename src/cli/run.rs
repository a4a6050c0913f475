use crate::prelude::{
    AppError, EnvGate, Phonebook,
    command::{Cli, Commands},
    parse_store,
};
use clap::Parser;
use std::{env, process::exit};

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();

    unsafe {
        env::set_var("STORAGE_CHOICE", &cli.storage_choice);
    }

    let mut book = Phonebook::new(parse_store()?);

    println!("Current storage choice is: {}", book.medium());

    let loaded = book.initialize(&EnvGate);
    if loaded.is_failure() {
        println!("{}", loaded);
        exit(1);
    }

    match cli.command {
        Commands::List => {
            if book.contacts().is_empty() {
                println!("No contact in contact list!");
                return Ok(());
            }

            for (i, contact) in book.contacts().iter().enumerate() {
                println!("{:>3}. {}", i + 1, contact);
            }
            Ok(())
        }

        Commands::Add { name, number } => {
            // The controller trusts its caller on this; the check lives
            // here, exactly where the original screen did it.
            if name.is_empty() || number.is_empty() {
                return Err(AppError::Validation(
                    "Name and number must not be empty".to_string(),
                ));
            }

            let notice = book.add(&name, &number);
            println!("{}", notice);

            if notice.is_failure() {
                exit(1);
            }
            Ok(())
        }

        Commands::Delete { name, number } => {
            let Some(contact) = book.find(&name, &number) else {
                return Err(AppError::NotFound("Contact".to_string()));
            };

            let notice = book.delete(&contact);
            println!("{}", notice);

            if notice.is_failure() {
                exit(1);
            }
            Ok(())
        }
    }
}
