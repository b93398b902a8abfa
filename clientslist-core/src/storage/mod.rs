pub mod migrations;
pub mod sqlite_storage;

pub use sqlite_storage::SqliteContactStore;

use shared_types::Contact;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database connection lock poisoned")]
    LockPoisoned,

    #[error("Could not determine local data directory")]
    NoDataDir,
}

/// Persistence collaborator for contacts. Calls are blocking from the
/// controller's point of view.
pub trait ContactStore: Send + Sync {
    /// Persists a draft, ignoring its incoming id, and returns the new id.
    fn insert(&self, contact: &Contact) -> Result<i64, StoreError>;

    /// Removes the row with the contact's id. Unknown ids are ignored.
    fn delete(&self, contact: &Contact) -> Result<(), StoreError>;

    fn select_all(&self) -> Result<Vec<Contact>, StoreError>;
}

/// Returns the path to the contacts database based on the operating system
///
/// - **macOS**: `~/Library/Application Support/clientslist/contacts.db`
/// - **Linux**: `~/.local/share/clientslist/contacts.db`
/// - **Windows**: `%LOCALAPPDATA%\clientslist\contacts.db`
pub fn default_db_path() -> Result<PathBuf, StoreError> {
    let data_dir = dirs::data_local_dir().ok_or(StoreError::NoDataDir)?;
    Ok(data_dir.join("clientslist").join("contacts.db"))
}
