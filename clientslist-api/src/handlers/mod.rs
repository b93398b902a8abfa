pub mod contacts;
pub mod sheet;

use actix_web::{web, HttpResponse, Result as ActixResult};

use crate::helpers::database::SharedController;

pub async fn health(controller: web::Data<SharedController>) -> ActixResult<HttpResponse> {
    match controller.lock() {
        Ok(controller) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "status": "healthy",
            "contacts": controller.contacts().len(),
        }))),
        Err(_) => Ok(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "unhealthy",
        }))),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route("/api/contacts", web::get().to(contacts::list_contacts))
        .route("/api/contacts", web::post().to(contacts::create_contact))
        .route("/api/contacts/items", web::get().to(contacts::list_contact_items))
        .route("/api/contacts/{id}", web::get().to(contacts::get_contact))
        .route("/api/contacts/{id}", web::delete().to(contacts::delete_contact))
        .route("/api/contacts/{id}/select", web::post().to(contacts::select_contact))
        .route("/api/sheet", web::get().to(sheet::get_sheet))
        .route("/api/sheet/add", web::post().to(sheet::open_add_sheet))
        .route("/api/sheet/dismiss", web::post().to(sheet::dismiss_sheet));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use clientslist_core::{ContactsController, SqliteContactStore};
    use shared_types::{
        Contact, ContactDetails, ContactListResponse, ContactsResponse, CreateContactRequest,
        FieldErrorsResponse, SheetState,
    };
    use std::sync::{Arc, Mutex};

    fn shared_controller() -> SharedController {
        let store = SqliteContactStore::open_in_memory().unwrap();
        let mut controller = ContactsController::new(Arc::new(store));
        controller.load().unwrap();
        Arc::new(Mutex::new(controller))
    }

    fn jane_request() -> CreateContactRequest {
        CreateContactRequest {
            name: "Jane".to_string(),
            lastname: "Doe".to_string(),
            email: "jane@doe.com".to_string(),
            number: "5551234567".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_and_show_contact() {
        let controller = shared_controller();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(controller.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sheet/add").to_request();
        let sheet: SheetState = test::call_and_read_body_json(&app, req).await;
        assert_eq!(sheet, SheetState::AddContact);

        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(jane_request())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Contact = test::read_body_json(resp).await;
        assert!(created.id > 0);

        let req = test::TestRequest::get()
            .uri(&format!("/api/contacts/{}", created.id))
            .to_request();
        let details: ContactDetails = test::call_and_read_body_json(&app, req).await;
        assert_eq!(details.masked_number, "+7 555 123-45-67");
        assert_eq!(details.contact, created);

        let req = test::TestRequest::get().uri("/api/sheet").to_request();
        let sheet: SheetState = test::call_and_read_body_json(&app, req).await;
        assert_eq!(sheet, SheetState::Closed);

        let req = test::TestRequest::get().uri("/api/contacts/items").to_request();
        let items: ContactListResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items.items[0].display_name, "1. Jane Doe");
    }

    #[actix_web::test]
    async fn test_create_invalid_contact() {
        let controller = shared_controller();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(controller.clone()))
                .configure(configure),
        )
        .await;

        let mut request = jane_request();
        request.email = "not-an-email".to_string();
        request.number = "555123456789".to_string();

        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(request)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let errors: FieldErrorsResponse = test::read_body_json(resp).await;
        assert_eq!(
            errors,
            FieldErrorsResponse {
                name: false,
                lastname: false,
                email: true,
                number: true,
            }
        );
        assert!(controller.lock().unwrap().contacts().is_empty());
    }

    #[actix_web::test]
    async fn test_select_and_delete_contact() {
        let controller = shared_controller();
        let created = controller
            .lock()
            .unwrap()
            .add(Contact::from(jane_request()))
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(controller.clone()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/contacts/{}/select", created.id))
            .to_request();
        let sheet: SheetState = test::call_and_read_body_json(&app, req).await;
        assert_eq!(
            sheet,
            SheetState::Details {
                contact: created.clone()
            }
        );

        let req = test::TestRequest::delete()
            .uri(&format!("/api/contacts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri("/api/contacts").to_request();
        let list: ContactsResponse = test::call_and_read_body_json(&app, req).await;
        assert!(list.contacts.is_empty());
        assert_eq!(controller.lock().unwrap().sheet(), &SheetState::Closed);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/contacts/{}", created.id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
