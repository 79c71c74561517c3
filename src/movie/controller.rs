use crate::movie::model::Movie;
use crate::movie::service::MovieService;
use crate::utils::error::ApiError;
use crate::utils::id::parse_object_id;
use crate::utils::json::{document_to_json, documents_to_json};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// List all movies
/// GET /movies
pub async fn get_movies(
    movie_service: web::Data<MovieService>,
) -> Result<HttpResponse, ApiError> {
    let movies = movie_service.list_movies().await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": 200,
        "data": documents_to_json(movies),
    })))
}

/// Create a movie
/// POST /movies
pub async fn create_movie(
    movie_service: web::Data<MovieService>,
    body: web::Json<Movie>,
) -> Result<HttpResponse, ApiError> {
    let created = movie_service.create_movie(&body).await?;

    Ok(HttpResponse::Created().json(json!({
        "status": 201,
        "data": document_to_json(created),
        "message": "Movie added successfully",
    })))
}

/// GET /movie/{id}
pub async fn get_movie(
    movie_service: web::Data<MovieService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = parse_object_id(&path.into_inner(), "movie")?;

    let movie = movie_service
        .get_movie(&movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "status": 200,
        "data": document_to_json(movie),
    })))
}

/// Merge the supplied fields into a movie
/// PUT /movie/{id}
pub async fn update_movie(
    movie_service: web::Data<MovieService>,
    path: web::Path<String>,
    body: web::Json<Movie>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = parse_object_id(&path.into_inner(), "movie")?;

    movie_service
        .update_movie(&movie_id, &body)
        .await?
        .ok_or_else(|| ApiError::NotFound("Movie not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "status": 200,
        "message": "Movie updated successfully",
    })))
}

/// Succeeds whether or not the movie existed.
/// DELETE /movie/{id}
pub async fn delete_movie(
    movie_service: web::Data<MovieService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = parse_object_id(&path.into_inner(), "movie")?;

    movie_service.delete_movie(&movie_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": 200,
        "message": "Movie deleted successfully",
    })))
}
