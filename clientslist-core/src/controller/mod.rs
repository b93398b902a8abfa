pub mod events;

pub use events::{ContactsEvent, Operation};

use crate::storage::{ContactStore, StoreError};
use shared_types::{Contact, ContactListItem, SheetState};
use std::sync::Arc;
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

/// Owns the in-memory mirror of the contact table and the screen's sheet
/// state. Every mutation hits the store first and the mirror second, so a
/// failed store call leaves the controller untouched.
pub struct ContactsController {
    store: Arc<dyn ContactStore>,
    contacts: Vec<Contact>,
    sheet: SheetState,
    loaded: bool,
    events: broadcast::Sender<ContactsEvent>,
}

impl ContactsController {
    pub fn new(store: Arc<dyn ContactStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            store,
            contacts: Vec::new(),
            sheet: SheetState::Closed,
            loaded: false,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ContactsEvent> {
        self.events.subscribe()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn sheet(&self) -> &SheetState {
        &self.sheet
    }

    pub fn find(&self, id: i64) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Numbered rows for the list view, starting at 1.
    pub fn list_items(&self) -> Vec<ContactListItem> {
        self.contacts
            .iter()
            .enumerate()
            .map(|(index, contact)| ContactListItem::new(index + 1, contact))
            .collect()
    }

    /// Startup load. Only the first call reads the store.
    pub fn load(&mut self) -> Result<&[Contact], StoreError> {
        if !self.loaded {
            self.reload()?;
        }
        Ok(&self.contacts)
    }

    /// Re-reads the whole table, replacing the mirror.
    pub fn reload(&mut self) -> Result<&[Contact], StoreError> {
        let contacts = self
            .store
            .select_all()
            .map_err(|e| self.report(Operation::Load, e))?;

        tracing::info!("Loaded {} contacts", contacts.len());
        self.contacts = contacts;
        self.loaded = true;
        self.emit(ContactsEvent::Loaded {
            count: self.contacts.len(),
        });

        Ok(&self.contacts)
    }

    /// Persists a validated draft and appends it with its new id.
    pub fn add(&mut self, draft: Contact) -> Result<Contact, StoreError> {
        let id = self
            .store
            .insert(&draft)
            .map_err(|e| self.report(Operation::Add, e))?;

        let contact = draft.with_id(id);
        tracing::info!("Added contact {}", id);
        self.contacts.push(contact.clone());
        self.emit(ContactsEvent::Added(contact.clone()));

        if self.sheet == SheetState::AddContact {
            self.set_sheet(SheetState::Closed);
        }

        Ok(contact)
    }

    pub fn remove(&mut self, contact: &Contact) -> Result<(), StoreError> {
        self.store
            .delete(contact)
            .map_err(|e| self.report(Operation::Remove, e))?;

        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != contact.id);
        tracing::info!(
            "Removed contact {} ({} entries)",
            contact.id,
            before - self.contacts.len()
        );
        self.emit(ContactsEvent::Removed { id: contact.id });

        if matches!(self.sheet, SheetState::Details { .. }) {
            self.set_sheet(SheetState::Closed);
        }

        Ok(())
    }

    /// Removes the contact with `id`. A miss in the mirror re-reads the
    /// store first, so rows added behind the controller's back still go.
    pub fn remove_by_id(&mut self, id: i64) -> Result<Option<Contact>, StoreError> {
        if self.find(id).is_none() {
            tracing::debug!("Contact {} not mirrored, reloading", id);
            self.reload()?;
        }

        let Some(contact) = self.find(id).cloned() else {
            return Ok(None);
        };
        self.remove(&contact)?;
        Ok(Some(contact))
    }

    pub fn select(&mut self, contact: Contact) {
        self.set_sheet(SheetState::Details { contact });
    }

    pub fn select_by_id(&mut self, id: i64) -> Option<Contact> {
        let contact = self.find(id).cloned()?;
        self.select(contact.clone());
        Some(contact)
    }

    pub fn open_add_sheet(&mut self) {
        self.set_sheet(SheetState::AddContact);
    }

    /// Closes whichever sheet is open.
    pub fn dismiss(&mut self) {
        self.set_sheet(SheetState::Closed);
    }

    fn set_sheet(&mut self, sheet: SheetState) {
        if self.sheet != sheet {
            tracing::debug!("Sheet changed to {:?}", sheet);
            self.sheet = sheet.clone();
            self.emit(ContactsEvent::SheetChanged(sheet));
        }
    }

    fn report(&self, operation: Operation, error: StoreError) -> StoreError {
        tracing::warn!("Contact {} failed: {}", operation, error);
        self.emit(ContactsEvent::Failed {
            operation,
            message: error.to_string(),
        });
        error
    }

    fn emit(&self, event: ContactsEvent) {
        // No subscribers is fine
        let _ = self.events.send(event);
    }
}
