use crate::request::{ContactResponse, ErrorResponse};
use actix_web::http::StatusCode;
use actix_web::HttpResponse;

pub fn ok_json() -> HttpResponse {
    HttpResponse::Ok().json(ContactResponse::ok())
}

pub fn error_json(status: StatusCode, error: &str) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(error))
}
