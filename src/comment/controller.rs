use crate::comment::model::{CommentUpdate, NewComment};
use crate::comment::service::CommentService;
use crate::utils::error::ApiError;
use crate::utils::id::parse_object_id;
use crate::utils::json::{document_to_json, documents_to_json};
use actix_web::{HttpResponse, web};
use log::{error, info};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

fn parse_ids(path: web::Path<(String, String)>) -> Result<(ObjectId, ObjectId), ApiError> {
    let (movie_id, comment_id) = path.into_inner();
    Ok((
        parse_object_id(&movie_id, "movie")?,
        parse_object_id(&comment_id, "comment")?,
    ))
}

/// Get all comments for a movie
/// GET /movie/{movie_id}/comments
pub async fn get_movie_comments(
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = parse_object_id(&path.into_inner(), "movie")?;

    let comments = comment_service.get_comments_for_movie(&movie_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "status": 200,
        "data": documents_to_json(comments),
    })))
}

/// Add a comment to a movie
/// POST /movie/{movie_id}/comments
pub async fn create_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<String>,
    body: web::Json<NewComment>,
) -> Result<HttpResponse, ApiError> {
    let movie_id = parse_object_id(&path.into_inner(), "movie")?;

    let created = comment_service
        .add_comment(movie_id, body.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "status": 201,
        "data": document_to_json(created),
        "message": "Comment added successfully",
    })))
}

/// GET /movie/{movie_id}/comment/{comment_id}
pub async fn get_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (movie_id, comment_id) = parse_ids(path)?;

    let comment = comment_service
        .get_comment(&movie_id, &comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({
        "status": 200,
        "data": document_to_json(comment),
    })))
}

/// PUT /movie/{movie_id}/comment/{comment_id}
pub async fn update_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<(String, String)>,
    body: web::Json<CommentUpdate>,
) -> Result<HttpResponse, ApiError> {
    let (movie_id, comment_id) = parse_ids(path)?;

    let outcome = comment_service
        .update_comment(&movie_id, &comment_id, &body)
        .await?;

    if outcome.modified_count != 1 {
        info!("Comment not found or not updated");
        return Err(ApiError::NotFound(
            "Comment not found or not updated".to_string(),
        ));
    }

    info!("Comment updated successfully");
    Ok(HttpResponse::Ok().json(json!({
        "status": 200,
        "message": "Comment updated successfully",
    })))
}

/// DELETE /movie/{movie_id}/comment/{comment_id}
pub async fn delete_comment(
    comment_service: web::Data<CommentService>,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, ApiError> {
    let (movie_id, comment_id) = parse_ids(path)?;

    let outcome = comment_service
        .delete_comment(&movie_id, &comment_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;

    match outcome.deleted_count {
        1 => {
            info!("Comment deleted successfully");
            Ok(HttpResponse::Ok().json(json!({
                "status": 200,
                "message": "Comment deleted successfully",
            })))
        }
        0 => Err(ApiError::NotFound("No comment was deleted".to_string())),
        n => {
            error!("Unexpected result: deleted_count = {}", n);
            Err(ApiError::Internal("Unexpected result".to_string()))
        }
    }
}
