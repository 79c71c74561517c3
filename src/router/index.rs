use crate::comment::index::comment_routes;
use crate::comment::service::CommentService;
use crate::database::DocumentStore;
use crate::docs::index::doc_routes;
use crate::movie::index::movie_routes;
use crate::movie::service::MovieService;
use crate::utils::error::ApiError;
use actix_web::web;
use std::sync::Arc;

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidPayload(err.to_string()).into())
}

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.configure(movie_routes);
    cfg.configure(comment_routes);
    cfg.configure(doc_routes);
}

/// Services over one shared store, plus every route.
pub fn app_config(store: Arc<dyn DocumentStore>) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(MovieService::new(store.clone())))
            .app_data(web::Data::new(CommentService::new(store)))
            .configure(routes);
    }
}
