use super::controller::get_api_doc;
use crate::middleware::method_not_allowed::method_not_allowed;
use actix_web::http::Method;
use actix_web::web;

const DOC_METHODS: &[Method] = &[Method::GET];

pub fn doc_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/doc")
            .route(web::get().to(get_api_doc))
            .default_service(method_not_allowed(DOC_METHODS)),
    );
}
