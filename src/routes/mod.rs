use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod customers;
pub mod images;

/// Maps a service failure onto its HTTP response. Not-found responses have
/// empty bodies; the other kinds carry the human-readable message.
pub fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound => HttpResponse::NotFound().finish(),
        ServiceError::Validation(msg) => {
            HttpResponse::BadRequest().json(json!({ "error": msg }))
        }
        ServiceError::QuotaExceeded(msg) => {
            HttpResponse::Conflict().json(json!({ "error": msg }))
        }
        ServiceError::Internal(msg) => {
            log::error!("Internal failure: {msg}");
            HttpResponse::InternalServerError().json(json!({ "error": msg }))
        }
    }
}

/// Registers every route. Literal segments go before their parameterized
/// siblings so `/customers/leads` never falls into `/customers/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/customers")
            .service(customers::list_leads)
            .service(customers::list_customers_only)
            .service(customers::list_customers)
            .service(customers::create_customer)
            .service(
                web::scope("/{customer_id}/images")
                    .service(images::count_images)
                    .service(images::upload_images)
                    .service(images::list_images)
                    .service(images::upload_image)
                    .service(images::delete_image),
            )
            .service(customers::get_customer)
            .service(customers::update_customer)
            .service(customers::delete_customer),
    );
}
