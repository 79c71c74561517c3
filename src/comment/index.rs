use super::controller::{
    create_comment, delete_comment, get_comment, get_movie_comments, update_comment,
};
use crate::middleware::method_not_allowed::method_not_allowed;
use actix_web::http::Method;
use actix_web::web;

const COLLECTION_METHODS: &[Method] = &[Method::GET, Method::POST];
const ITEM_METHODS: &[Method] = &[Method::GET, Method::PUT, Method::DELETE];

pub fn comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/movie/{movie_id}/comments")
            .route(web::get().to(get_movie_comments))
            .route(web::post().to(create_comment))
            .default_service(method_not_allowed(COLLECTION_METHODS)),
    )
    .service(
        web::resource("/movie/{movie_id}/comment/{comment_id}")
            .route(web::get().to(get_comment))
            .route(web::put().to(update_comment))
            .route(web::delete().to(delete_comment))
            .default_service(method_not_allowed(ITEM_METHODS)),
    );
}
