use actix_web::http::header;
use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;
use validator::Validate;

use crate::domain::customer::NewCustomer;
use crate::dto::customer::CreateCustomerRequest;
use crate::repository::{CustomerListQuery, DieselRepository};
use crate::routes::error_response;
use crate::services;

#[get("")]
pub async fn list_customers(repo: web::Data<DieselRepository>) -> impl Responder {
    match services::customer::list_customers(repo.get_ref(), CustomerListQuery::new()) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(e) => error_response(e),
    }
}

#[get("/leads")]
pub async fn list_leads(repo: web::Data<DieselRepository>) -> impl Responder {
    match services::customer::list_customers(repo.get_ref(), CustomerListQuery::new().leads_only())
    {
        Ok(leads) => HttpResponse::Ok().json(leads),
        Err(e) => error_response(e),
    }
}

#[get("/customers-only")]
pub async fn list_customers_only(repo: web::Data<DieselRepository>) -> impl Responder {
    match services::customer::list_customers(
        repo.get_ref(),
        CustomerListQuery::new().customers_only(),
    ) {
        Ok(customers) => HttpResponse::Ok().json(customers),
        Err(e) => error_response(e),
    }
}

#[get("/{id}")]
pub async fn get_customer(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::customer::get_customer(repo.get_ref(), id.into_inner()) {
        Ok(Some(customer)) => HttpResponse::Ok().json(customer),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(e),
    }
}

#[post("")]
pub async fn create_customer(
    repo: web::Data<DieselRepository>,
    payload: web::Json<CreateCustomerRequest>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
    }

    let new_customer: NewCustomer = (&payload.into_inner()).into();
    match services::customer::create_customer(repo.get_ref(), &new_customer) {
        Ok(customer) => HttpResponse::Created()
            .insert_header((header::LOCATION, format!("/customers/{}", customer.id)))
            .json(customer),
        Err(e) => error_response(e),
    }
}

#[put("/{id}")]
pub async fn update_customer(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<CreateCustomerRequest>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
    }

    let updates: NewCustomer = (&payload.into_inner()).into();
    match services::customer::update_customer(repo.get_ref(), id.into_inner(), &updates) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(e) => error_response(e),
    }
}

#[delete("/{id}")]
pub async fn delete_customer(
    id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match services::customer::delete_customer(repo.get_ref(), id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}
