use rusty_phonebook::prelude::run_app;

fn main() {
    if let Err(err) = run_app() {
        eprintln!("Error: {:?}", err);
        std::process::exit(1);
    }
}
