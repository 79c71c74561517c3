use crate::docs::openapi::api_description;
use actix_web::HttpResponse;

/// Serve the generated API description
/// GET /doc
pub async fn get_api_doc() -> HttpResponse {
    HttpResponse::Ok().json(api_description())
}
