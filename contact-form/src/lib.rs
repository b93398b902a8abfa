//! Contact Form Crate
//!
//! Pure, storage-free logic behind the add-contact form: the phone number
//! display mask and the field validators that gate submission.
//!
//! # Example
//!
//! ```rust
//! use contact_form::{format_mask, ContactForm};
//!
//! assert_eq!(format_mask("9991234567"), "+7 999 123-45-67");
//!
//! let mut form = ContactForm::new();
//! form.set_name("Jane");
//! form.set_lastname("Doe");
//! form.set_email("jane@doe.com");
//! form.set_number("5551234567");
//! assert!(form.can_submit());
//! ```

pub mod form;
pub mod phone_mask;
pub mod validation;

pub use form::ContactForm;
pub use phone_mask::{format_mask, masked_offset_to_raw, raw_offset_to_masked, MaskedPhone};
pub use validation::{
    is_email_invalid, is_lastname_invalid, is_name_invalid, is_phone_invalid, FieldValidation,
    ValidationError,
};
