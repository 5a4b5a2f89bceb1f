//! Rolodex - main entry point
//!
//! The interactive menu loop. All prompting, confirmation, and formatting
//! lives here; business logic stays behind the manager's public operations.

use anyhow::Result;
use rolodex::{Config, ContactManager};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logging goes to stderr only, so it never interleaves with the menu
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(path = %config.contacts_file.display(), "starting rolodex");

    let mut manager = ContactManager::open(config.contacts_file);

    println!("Welcome to Rolodex!");
    println!("Data file: {}", manager.storage_path().display());

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        print_menu();
        // EOF behaves like quit
        let Some(choice) = prompt(&mut input, "Your choice: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add_contact(&mut input, &mut manager)?,
            "2" => println!("{}", manager.list_all()),
            "3" => search_contact(&mut input, &manager)?,
            "4" => delete_contact(&mut input, &mut manager)?,
            "5" => print_stats(&manager),
            "6" => export_contacts(&mut input, &manager)?,
            "7" => import_contacts(&mut input, &mut manager)?,
            "8" => {
                println!("Goodbye! Your contacts have been saved.");
                break;
            }
            "" => {}
            _ => println!("Invalid choice"),
        }
    }

    Ok(())
}

fn print_menu() {
    println!();
    println!("{}", "=".repeat(40));
    println!("ROLODEX");
    println!("{}", "=".repeat(40));
    println!("1. Add a contact");
    println!("2. Show all contacts");
    println!("3. Search for a contact");
    println!("4. Delete a contact");
    println!("5. Statistics");
    println!("6. Export to CSV");
    println!("7. Import from CSV");
    println!("8. Quit");
    println!("{}", "=".repeat(40));
}

/// Print `label`, then read one trimmed line. `None` means EOF.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn add_contact(input: &mut impl BufRead, manager: &mut ContactManager) -> io::Result<()> {
    println!("\nNEW CONTACT");
    let Some(name) = prompt(input, "Name: ")? else {
        return Ok(());
    };
    let Some(email) = prompt(input, "Email: ")? else {
        return Ok(());
    };
    let Some(telephone) = prompt(input, "Phone: ")? else {
        return Ok(());
    };

    if name.is_empty() || email.is_empty() || telephone.is_empty() {
        println!("All fields are required");
        return Ok(());
    }

    println!("{}", manager.add(&name, &email, &telephone));
    Ok(())
}

fn search_contact(input: &mut impl BufRead, manager: &ContactManager) -> io::Result<()> {
    let Some(term) = prompt(input, "\nSearch (name or email): ")? else {
        return Ok(());
    };
    if !term.is_empty() {
        println!("{}", manager.search(&term));
    }
    Ok(())
}

fn delete_contact(input: &mut impl BufRead, manager: &mut ContactManager) -> io::Result<()> {
    let Some(email) = prompt(input, "\nEmail of contact to delete: ")? else {
        return Ok(());
    };
    if email.is_empty() {
        return Ok(());
    }

    let question = format!("Confirm deletion of {}? (y/n): ", email);
    let Some(confirmation) = prompt(input, &question)? else {
        return Ok(());
    };
    if confirmation.eq_ignore_ascii_case("y") {
        println!("{}", manager.delete(&email));
    }
    Ok(())
}

fn print_stats(manager: &ContactManager) {
    println!("\nSTATISTICS");
    println!("Total contacts: {}", manager.count());
    if let Some(last) = manager.last_added() {
        println!("Last added: {} ({})", last.name(), last.date_added());
    }
}

fn export_contacts(input: &mut impl BufRead, manager: &ContactManager) -> io::Result<()> {
    let Some(path) = prompt(input, "\nExport to [contacts.csv]: ")? else {
        return Ok(());
    };
    let path = csv_path_or_default(path);
    println!("{}", manager.export_csv(&path));
    Ok(())
}

fn import_contacts(input: &mut impl BufRead, manager: &mut ContactManager) -> io::Result<()> {
    let Some(path) = prompt(input, "\nImport from [contacts.csv]: ")? else {
        return Ok(());
    };
    let path = csv_path_or_default(path);
    println!("{}", manager.import_csv(&path));
    Ok(())
}

fn csv_path_or_default(path: String) -> PathBuf {
    if path.is_empty() {
        PathBuf::from("contacts.csv")
    } else {
        PathBuf::from(path)
    }
}
