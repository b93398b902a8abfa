use actix_web::{web, HttpResponse, Result as ActixResult};

use crate::handlers::contacts::lock;
use crate::helpers::database::SharedController;

pub async fn get_sheet(controller: web::Data<SharedController>) -> ActixResult<HttpResponse> {
    let controller = lock(&controller)?;
    Ok(HttpResponse::Ok().json(controller.sheet()))
}

pub async fn open_add_sheet(controller: web::Data<SharedController>) -> ActixResult<HttpResponse> {
    let mut controller = lock(&controller)?;
    controller.open_add_sheet();
    Ok(HttpResponse::Ok().json(controller.sheet()))
}

pub async fn dismiss_sheet(controller: web::Data<SharedController>) -> ActixResult<HttpResponse> {
    let mut controller = lock(&controller)?;
    controller.dismiss();
    Ok(HttpResponse::Ok().json(controller.sheet()))
}
