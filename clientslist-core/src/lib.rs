pub mod controller;
pub mod storage;

pub use controller::{ContactsController, ContactsEvent, Operation};
pub use storage::{default_db_path, ContactStore, SqliteContactStore, StoreError};
