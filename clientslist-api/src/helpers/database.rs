use anyhow::Context;
use clientslist_core::{default_db_path, ContactsController, SqliteContactStore};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::config::ApiConfig;

pub type SharedController = Arc<Mutex<ContactsController>>;

/// Returns the configured database path, falling back to the platform data
/// directory
pub fn get_db_path(config: &ApiConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = config.database.as_ref().and_then(|db| db.path.as_ref()) {
        return Ok(PathBuf::from(path));
    }

    Ok(default_db_path()?)
}

/// Open the store and load the contact list into a fresh controller
pub fn initialize_controller(db_path: &Path) -> anyhow::Result<SharedController> {
    let store = SqliteContactStore::open(db_path)
        .with_context(|| format!("Failed to open contacts db at {:?}", db_path))?;

    let mut controller = ContactsController::new(Arc::new(store));
    controller.load().context("Failed to load contacts")?;

    Ok(Arc::new(Mutex::new(controller)))
}
