use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One address-book entry. `id == 0` marks a draft that has not been
/// persisted yet; the store assigns the real id on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub lastname: String,
    pub email: String,
    /// Raw phone digits, unmasked.
    pub number: String,
}

impl Contact {
    pub fn draft(
        name: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            lastname: lastname.into(),
            email: email.into(),
            number: number.into(),
        }
    }

    pub fn is_draft(&self) -> bool {
        self.id == 0
    }

    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.lastname)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CreateContactRequest {
    pub name: String,
    pub lastname: String,
    pub email: String,
    pub number: String,
}

impl From<CreateContactRequest> for Contact {
    fn from(request: CreateContactRequest) -> Self {
        Contact::draft(request.name, request.lastname, request.email, request.number)
    }
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactsResponse {
    pub contacts: Vec<Contact>,
}

/// A row of the contact list as rendered: `"1. Jane Doe"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactListItem {
    pub position: usize,
    pub id: i64,
    pub display_name: String,
}

impl ContactListItem {
    pub fn new(position: usize, contact: &Contact) -> Self {
        Self {
            position,
            id: contact.id,
            display_name: format!("{}. {}", position, contact.full_name()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactListResponse {
    pub items: Vec<ContactListItem>,
}

/// Detail view payload; the phone number is shown masked.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactDetails {
    pub contact: Contact,
    pub masked_number: String,
}

/// Per-field "is invalid" flags for the add-contact form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrorsResponse {
    pub name: bool,
    pub lastname: bool,
    pub email: bool,
    pub number: bool,
}

/// Which bottom sheet the screen is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum SheetState {
    #[default]
    Closed,
    AddContact,
    Details { contact: Contact },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_has_zero_id() {
        let draft = Contact::draft("Jane", "Doe", "jane@doe.com", "5551234567");
        assert!(draft.is_draft());

        let saved = draft.with_id(7);
        assert!(!saved.is_draft());
        assert_eq!(saved.id, 7);
        assert_eq!(saved.name, "Jane");
    }

    #[test]
    fn test_list_item_display_name() {
        let contact = Contact::draft("Jane", "Doe", "jane@doe.com", "5551234567").with_id(3);
        let item = ContactListItem::new(1, &contact);

        assert_eq!(item.display_name, "1. Jane Doe");
        assert_eq!(item.id, 3);
    }

    #[test]
    fn test_sheet_state_serialization() {
        let json = serde_json::to_string(&SheetState::AddContact).unwrap();
        assert_eq!(json, r#"{"kind":"add_contact"}"#);

        let details = SheetState::Details {
            contact: Contact::draft("Jane", "Doe", "jane@doe.com", "5551234567").with_id(1),
        };
        let json = serde_json::to_string(&details).unwrap();
        let back: SheetState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, details);
    }
}
