use crate::database::StoreError;
use crate::utils::validation::{InvalidDate, ValidationError};
use actix_web::http::{Method, StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use log::{error, warn};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Bad Request. Invalid JSON payload.")]
    InvalidPayload(String),

    #[error("Bad Request. Missing required fields.")]
    Validation(#[from] ValidationError),

    #[error("Bad Request. Invalid date.")]
    InvalidDate(#[from] InvalidDate),

    #[error("Method {method} Not Allowed")]
    MethodNotAllowed {
        method: Method,
        allowed: &'static [Method],
    },

    #[error("Internal Server Error")]
    Store(#[from] StoreError),

    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    fn details(&self) -> Option<String> {
        match self {
            ApiError::InvalidPayload(details) | ApiError::Internal(details) => {
                Some(details.clone())
            }
            ApiError::Validation(err) => Some(err.to_string()),
            ApiError::InvalidDate(err) => Some(err.to_string()),
            ApiError::Store(err) => Some(err.to_string()),
            _ => None,
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match *self {
            ApiError::NotFound(..) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(..) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPayload(..) => StatusCode::BAD_REQUEST,
            ApiError::Validation(..) => StatusCode::BAD_REQUEST,
            ApiError::InvalidDate(..) => StatusCode::BAD_REQUEST,
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(..) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(..) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();

        if let ApiError::MethodNotAllowed { allowed, .. } = self {
            let allow = allowed
                .iter()
                .map(Method::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return HttpResponse::build(status_code)
                .insert_header((header::ALLOW, allow))
                .body(self.to_string());
        }

        let details = self.details();
        if status_code.is_server_error() {
            error!("{}: {}", self, details.as_deref().unwrap_or("no details"));
        } else {
            warn!("{} ({})", self, status_code);
        }

        let body = match details {
            Some(details) => json!({ "error": self.to_string(), "details": details }),
            None => json!({ "error": self.to_string() }),
        };

        HttpResponse::build(status_code).json(body)
    }
}
