use crate::constant::GENERIC_FAILURE;
use crate::utils;
use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use std::fmt::{Debug, Formatter};

/// Everything that can go wrong inside the intake endpoint.
///
/// Whatever the cause, the caller only ever sees a 500 with a generic
/// envelope; the chain is written to the logs.
#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Failed to parse the lead submission body.")]
    Parse(#[source] serde_json::Error),

    #[error(transparent)]
    Delivery(#[from] anyhow::Error),
}

impl Debug for ContactError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        utils::error_json(self.status_code(), GENERIC_FAILURE)
    }
}
