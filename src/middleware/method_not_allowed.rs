use crate::utils::error::ApiError;
use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, Route, web};

/// Fallback for a resource: any verb outside `allowed` gets a 405 naming the
/// verb, with `allowed` in the `Allow` header.
pub fn method_not_allowed(allowed: &'static [Method]) -> Route {
    web::to(move |req: HttpRequest| async move {
        Err::<HttpResponse, ApiError>(ApiError::MethodNotAllowed {
            method: req.method().clone(),
            allowed,
        })
    })
}
