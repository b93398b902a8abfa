use super::{migrations, ContactStore, StoreError};
use rusqlite::{params, Connection, Row};
use shared_types::Contact;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub type DbConnection = Arc<Mutex<Connection>>;

pub struct SqliteContactStore {
    conn: DbConnection,
}

impl SqliteContactStore {
    /// Wraps an already migrated connection.
    pub fn new(conn: DbConnection) -> Self {
        Self { conn }
    }

    /// Open (or create) the database file and run migrations
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        migrations::run_migrations(&conn)?;
        tracing::debug!("Opened contacts database at {:?}", db_path);

        Ok(Self::new(Arc::new(Mutex::new(conn))))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        migrations::run_migrations(&conn)?;
        Ok(Self::new(Arc::new(Mutex::new(conn))))
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

fn contact_from_row(row: &Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        lastname: row.get(2)?,
        email: row.get(3)?,
        number: row.get(4)?,
    })
}

impl ContactStore for SqliteContactStore {
    fn insert(&self, contact: &Contact) -> Result<i64, StoreError> {
        let conn = self.lock()?;

        conn.execute(
            "INSERT INTO contact (name, lastname, email, number) VALUES (?1, ?2, ?3, ?4)",
            params![contact.name, contact.lastname, contact.email, contact.number],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn delete(&self, contact: &Contact) -> Result<(), StoreError> {
        let conn = self.lock()?;

        let removed = conn.execute("DELETE FROM contact WHERE id = ?1", [contact.id])?;
        if removed == 0 {
            tracing::debug!("No contact row with id {} to delete", contact.id);
        }

        Ok(())
    }

    fn select_all(&self) -> Result<Vec<Contact>, StoreError> {
        let conn = self.lock()?;

        let mut stmt =
            conn.prepare("SELECT id, name, lastname, email, number FROM contact ORDER BY id ASC")?;

        let contacts = stmt
            .query_map([], contact_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(contacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Contact {
        Contact::draft("Jane", "Doe", "jane@doe.com", "5551234567")
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let store = SqliteContactStore::open_in_memory().unwrap();

        let first = store.insert(&jane()).unwrap();
        let second = store.insert(&jane().with_id(first)).unwrap();

        assert!(first > 0);
        assert_ne!(first, second);
        assert_eq!(store.select_all().unwrap().len(), 2);
    }

    #[test]
    fn test_select_all_maps_rows() {
        let store = SqliteContactStore::open_in_memory().unwrap();
        let id = store.insert(&jane()).unwrap();

        let contacts = store.select_all().unwrap();
        assert_eq!(contacts, vec![jane().with_id(id)]);
    }

    #[test]
    fn test_delete_by_id() {
        let store = SqliteContactStore::open_in_memory().unwrap();
        let keep = store.insert(&jane()).unwrap();
        let drop_id = store
            .insert(&Contact::draft("John", "Roe", "john@roe.com", "5550000000"))
            .unwrap();

        store
            .delete(&Contact::draft("", "", "", "").with_id(drop_id))
            .unwrap();

        let ids: Vec<i64> = store.select_all().unwrap().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![keep]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let store = SqliteContactStore::open_in_memory().unwrap();
        store.insert(&jane()).unwrap();

        store.delete(&jane().with_id(999)).unwrap();
        assert_eq!(store.select_all().unwrap().len(), 1);
    }

    #[test]
    fn test_open_file_persists_across_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("contacts.db");

        let id = {
            let store = SqliteContactStore::open(&path).unwrap();
            store.insert(&jane()).unwrap()
        };

        let reopened = SqliteContactStore::open(&path).unwrap();
        assert_eq!(reopened.select_all().unwrap(), vec![jane().with_id(id)]);
    }
}
