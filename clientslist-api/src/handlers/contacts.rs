use actix_web::{web, HttpResponse, Result as ActixResult};
use contact_form::{format_mask, ContactForm};
use shared_types::{
    ContactDetails, ContactListResponse, ContactsResponse, CreateContactRequest, ErrorResponse,
    FieldErrorsResponse,
};
use std::sync::MutexGuard;

use clientslist_core::ContactsController;

use crate::helpers::database::SharedController;

pub(crate) fn lock(
    controller: &SharedController,
) -> ActixResult<MutexGuard<'_, ContactsController>> {
    controller
        .lock()
        .map_err(|_| actix_web::error::ErrorInternalServerError("Contacts controller poisoned"))
}

fn not_found(id: i64) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(format!("Contact {} not found", id)))
}

pub async fn list_contacts(controller: web::Data<SharedController>) -> ActixResult<HttpResponse> {
    let controller = lock(&controller)?;

    Ok(HttpResponse::Ok().json(ContactsResponse {
        contacts: controller.contacts().to_vec(),
    }))
}

pub async fn list_contact_items(
    controller: web::Data<SharedController>,
) -> ActixResult<HttpResponse> {
    let controller = lock(&controller)?;

    Ok(HttpResponse::Ok().json(ContactListResponse {
        items: controller.list_items(),
    }))
}

pub async fn get_contact(
    controller: web::Data<SharedController>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();
    let controller = lock(&controller)?;

    let Some(contact) = controller.find(contact_id).cloned() else {
        return Ok(not_found(contact_id));
    };

    let masked_number = format_mask(&contact.number);
    Ok(HttpResponse::Ok().json(ContactDetails {
        contact,
        masked_number,
    }))
}

pub async fn create_contact(
    controller: web::Data<SharedController>,
    request: web::Json<CreateContactRequest>,
) -> ActixResult<HttpResponse> {
    let request = request.into_inner();

    let mut form = ContactForm::new();
    form.set_name(request.name);
    form.set_lastname(request.lastname);
    form.set_email(request.email);
    // A rejected number edit leaves the field empty, which fails validation
    form.set_number(&request.number);

    let draft = match form.submit() {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!("Rejected contact: {}", e);
            return Ok(HttpResponse::UnprocessableEntity()
                .json(FieldErrorsResponse::from(e.validation)));
        }
    };

    let mut controller = lock(&controller)?;
    match controller.add(draft) {
        Ok(contact) => Ok(HttpResponse::Created().json(contact)),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))),
    }
}

pub async fn delete_contact(
    controller: web::Data<SharedController>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();
    let mut controller = lock(&controller)?;

    match controller.remove_by_id(contact_id) {
        Ok(Some(_)) => Ok(HttpResponse::NoContent().finish()),
        Ok(None) => Ok(not_found(contact_id)),
        Err(e) => Ok(HttpResponse::InternalServerError().json(ErrorResponse::new(e.to_string()))),
    }
}

pub async fn select_contact(
    controller: web::Data<SharedController>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let contact_id = path.into_inner();
    let mut controller = lock(&controller)?;

    if controller.select_by_id(contact_id).is_none() {
        return Ok(not_found(contact_id));
    }

    Ok(HttpResponse::Ok().json(controller.sheet()))
}
