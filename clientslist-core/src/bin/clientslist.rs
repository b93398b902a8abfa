use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use contact_form::{format_mask, ContactForm};
use std::path::PathBuf;
use std::sync::Arc;

use clientslist_core::{default_db_path, ContactsController, SqliteContactStore};

#[derive(Parser, Debug)]
#[command(name = "clientslist", about = "Manage the local contact list")]
struct Cli {
    /// Path to the contacts database (defaults to the platform data dir)
    #[arg(long, value_name = "PATH", global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all contacts
    List,

    /// Show one contact with its masked phone number
    Show {
        #[arg(long)]
        id: i64,
    },

    /// Add a new contact
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        lastname: String,
        #[arg(long)]
        email: String,
        /// Ten raw digits, without the +7 prefix
        #[arg(long)]
        number: String,
    },

    /// Delete a contact
    Remove {
        #[arg(long)]
        id: i64,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let db_path = match cli.db {
        Some(path) => path,
        None => default_db_path()?,
    };
    let store = SqliteContactStore::open(&db_path)
        .with_context(|| format!("Failed to open contacts db at {:?}", db_path))?;

    let mut controller = ContactsController::new(Arc::new(store));
    controller.load()?;

    match cli.command {
        Command::List => {
            for item in controller.list_items() {
                println!("{}  (id {})", item.display_name, item.id);
            }
        }
        Command::Show { id } => {
            let contact = controller
                .select_by_id(id)
                .ok_or_else(|| anyhow::anyhow!("No contact with id {}", id))?;
            println!("Name:      {}", contact.name);
            println!("Last name: {}", contact.lastname);
            println!("Email:     {}", contact.email);
            println!("Number:    {}", format_mask(&contact.number));
        }
        Command::Add {
            name,
            lastname,
            email,
            number,
        } => {
            let mut form = ContactForm::new();
            form.set_name(name);
            form.set_lastname(lastname);
            form.set_email(email);
            if !form.set_number(&number) {
                anyhow::bail!("Phone number must be at most 10 digits");
            }

            controller.open_add_sheet();
            let contact = controller.add(form.submit()?)?;
            println!("Added contact {} ({})", contact.id, contact.full_name());
        }
        Command::Remove { id } => match controller.remove_by_id(id)? {
            Some(contact) => println!("Removed contact {} ({})", id, contact.full_name()),
            None => anyhow::bail!("No contact with id {}", id),
        },
    }

    Ok(())
}

fn log_filter(rust_log: Option<String>) -> String {
    rust_log.unwrap_or_else(|| "info".to_string())
}

fn init_tracing() {
    let env_filter = log_filter(std::env::var("RUST_LOG").ok());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_info() {
        assert_eq!(log_filter(None), "info");
        assert_eq!(log_filter(Some("debug".to_string())), "debug");
    }
}
