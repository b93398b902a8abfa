use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod contact;

pub use contact::{
    Contact, ContactDetails, ContactListItem, ContactListResponse, ContactsResponse,
    CreateContactRequest, FieldErrorsResponse, SheetState,
};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
