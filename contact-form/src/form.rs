use shared_types::Contact;

use crate::phone_mask::{MaskedPhone, MAX_DIGITS};
use crate::validation::{FieldValidation, ValidationError};

/// Field state of the add-contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub lastname: String,
    pub email: String,
    number: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_lastname(&mut self, lastname: impl Into<String>) {
        self.lastname = lastname.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Applies a phone edit if it still fits the mask. Rejected edits leave the
    /// previous value in place.
    pub fn set_number(&mut self, candidate: &str) -> bool {
        let fits = candidate.chars().count() <= MAX_DIGITS
            && candidate.chars().all(|c| c.is_ascii_digit());
        if fits {
            self.number = candidate.to_string();
        }
        fits
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn masked_number(&self) -> MaskedPhone {
        MaskedPhone::new(&self.number)
    }

    pub fn validation(&self) -> FieldValidation {
        FieldValidation::check(&self.name, &self.lastname, &self.email, &self.number)
    }

    pub fn can_submit(&self) -> bool {
        self.validation().is_valid()
    }

    /// Builds the draft contact (id 0) for the controller.
    pub fn submit(&self) -> Result<Contact, ValidationError> {
        self.validation().into_result()?;

        Ok(Contact::draft(
            self.name.clone(),
            self.lastname.clone(),
            self.email.clone(),
            self.number.clone(),
        ))
    }
}
