use crate::comment::model::{COMMENTS, CommentUpdate, NewComment};
use crate::database::{DeleteOutcome, DocumentStore, UpdateOutcome};
use crate::movie::model::MOVIES;
use crate::utils::error::ApiError;
use crate::utils::id::parse_object_id;
use log::info;
use mongodb::bson::{Document, doc, oid::ObjectId};
use std::sync::Arc;

pub struct CommentService {
    store: Arc<dyn DocumentStore>,
}

fn comment_filter(movie_id: &ObjectId, comment_id: &ObjectId) -> Document {
    doc! { "_id": comment_id, "movie_id": movie_id }
}

impl CommentService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        CommentService { store }
    }

    /// Get all comments for a specific movie
    pub async fn get_comments_for_movie(
        &self,
        movie_id: &ObjectId,
    ) -> Result<Vec<Document>, ApiError> {
        Ok(self
            .store
            .find_many(COMMENTS, doc! { "movie_id": movie_id })
            .await?)
    }

    /// Get a single comment, scoped to its movie
    pub async fn get_comment(
        &self,
        movie_id: &ObjectId,
        comment_id: &ObjectId,
    ) -> Result<Option<Document>, ApiError> {
        Ok(self
            .store
            .find_one(COMMENTS, comment_filter(movie_id, comment_id))
            .await?)
    }

    /// Add a new comment to a movie. The path movie id wins; a payload
    /// naming another movie is rejected.
    pub async fn add_comment(
        &self,
        movie_id: ObjectId,
        mut comment: NewComment,
    ) -> Result<Document, ApiError> {
        let given = comment.movie_id.as_deref().map(str::trim).unwrap_or_default();
        if !given.is_empty() && parse_object_id(given, "movie")? != movie_id {
            return Err(ApiError::BadRequest(
                "Bad Request. movie_id does not match the movie in the path.".to_string(),
            ));
        }
        comment.movie_id = Some(movie_id.to_hex());

        let comment = comment.into_comment(movie_id)?;

        if self
            .store
            .find_one(MOVIES, doc! { "_id": movie_id })
            .await?
            .is_none()
        {
            return Err(ApiError::NotFound("Movie not found".to_string()));
        }

        let document = comment.to_document();
        let created = self.store.insert_one(COMMENTS, document).await?;

        info!("Comment added to movie {}", movie_id);
        Ok(created)
    }

    /// Empty updates touch nothing and report zero modifications. A comment
    /// stays with its movie; a payload carrying `movie_id` is rejected.
    pub async fn update_comment(
        &self,
        movie_id: &ObjectId,
        comment_id: &ObjectId,
        changes: &CommentUpdate,
    ) -> Result<UpdateOutcome, ApiError> {
        if changes.movie_id.is_some() {
            return Err(ApiError::BadRequest(
                "Bad Request. movie_id cannot be changed.".to_string(),
            ));
        }

        let fields = changes.to_document();
        if fields.is_empty() {
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            });
        }

        Ok(self
            .store
            .update_one(COMMENTS, comment_filter(movie_id, comment_id), fields)
            .await?)
    }

    /// Deletes an existing comment. `None` when nothing matched the lookup.
    pub async fn delete_comment(
        &self,
        movie_id: &ObjectId,
        comment_id: &ObjectId,
    ) -> Result<Option<DeleteOutcome>, ApiError> {
        if self.get_comment(movie_id, comment_id).await?.is_none() {
            return Ok(None);
        }

        let outcome = self
            .store
            .delete_one(COMMENTS, comment_filter(movie_id, comment_id))
            .await?;
        Ok(Some(outcome))
    }
}
