use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::dto::image::{UploadImageRequest, UploadImagesRequest};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services;

#[get("")]
pub async fn list_images(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::image::list_customer_images(repo.get_ref(), customer_id.into_inner()) {
        Ok(images) => HttpResponse::Ok().json(images),
        Err(e) => error_response(e),
    }
}

#[get("/count")]
pub async fn count_images(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::image::count_customer_images(repo.get_ref(), customer_id.into_inner()) {
        Ok(count) => HttpResponse::Ok().json(count),
        Err(e) => error_response(e),
    }
}

#[post("")]
pub async fn upload_image(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<UploadImageRequest>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
    }

    let customer_id = customer_id.into_inner();
    let new_image = payload.into_inner().into_new_image(customer_id);
    match services::image::upload_image(repo.get_ref(), new_image) {
        Ok(Some(image)) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/customers/{customer_id}/images"),
            ))
            .json(image),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(e),
    }
}

#[post("/batch")]
pub async fn upload_images(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<UploadImagesRequest>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
    }

    let customer_id = customer_id.into_inner();
    let new_images = payload
        .into_inner()
        .images
        .into_iter()
        .map(|image| image.into_new_image(customer_id))
        .collect();
    match services::image::upload_images(repo.get_ref(), customer_id, new_images) {
        Ok(images) => HttpResponse::Created()
            .insert_header((
                header::LOCATION,
                format!("/customers/{customer_id}/images"),
            ))
            .json(images),
        Err(e) => error_response(e),
    }
}

#[delete("/{image_id}")]
pub async fn delete_image(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    // Deletion goes by image id alone; the customer segment of the path is
    // not cross-checked.
    let (_customer_id, image_id) = path.into_inner();
    match services::image::delete_image(repo.get_ref(), image_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}
