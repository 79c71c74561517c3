use actix_web::HttpResponse;
use serde_json::json;

/// Default service for paths no resource claims.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "error": "Route does not exist",
    }))
}
