use super::controller::{create_movie, delete_movie, get_movie, get_movies, update_movie};
use crate::middleware::method_not_allowed::method_not_allowed;
use actix_web::http::Method;
use actix_web::web;

const COLLECTION_METHODS: &[Method] = &[Method::GET, Method::POST];
const ITEM_METHODS: &[Method] = &[Method::GET, Method::PUT, Method::DELETE];

pub fn movie_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/movies")
            .route(web::get().to(get_movies))
            .route(web::post().to(create_movie))
            .default_service(method_not_allowed(COLLECTION_METHODS)),
    )
    .service(
        web::resource("/movie/{movie_id}")
            .route(web::get().to(get_movie))
            .route(web::put().to(update_movie))
            .route(web::delete().to(delete_movie))
            .default_service(method_not_allowed(ITEM_METHODS)),
    );
}
