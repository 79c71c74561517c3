use crate::database::{DeleteOutcome, DocumentStore, UpdateOutcome};
use crate::movie::model::{MOVIES, Movie};
use crate::utils::error::ApiError;
use log::info;
use mongodb::bson::{Document, doc, oid::ObjectId};
use std::sync::Arc;

pub struct MovieService {
    store: Arc<dyn DocumentStore>,
}

impl MovieService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        MovieService { store }
    }

    pub async fn list_movies(&self) -> Result<Vec<Document>, ApiError> {
        Ok(self.store.find_many(MOVIES, doc! {}).await?)
    }

    /// Validates before touching the store; an invalid movie is never inserted.
    pub async fn create_movie(&self, movie: &Movie) -> Result<Document, ApiError> {
        movie.validate()?;

        let document = movie.to_document()?;
        let created = self.store.insert_one(MOVIES, document).await?;

        info!("Movie added: {:?}", created.get_object_id("_id").ok());
        Ok(created)
    }

    pub async fn get_movie(&self, id: &ObjectId) -> Result<Option<Document>, ApiError> {
        Ok(self.store.find_one(MOVIES, doc! { "_id": id }).await?)
    }

    /// Merges the supplied fields into an existing movie. `None` when the
    /// movie does not exist.
    pub async fn update_movie(
        &self,
        id: &ObjectId,
        changes: &Movie,
    ) -> Result<Option<UpdateOutcome>, ApiError> {
        if self.get_movie(id).await?.is_none() {
            return Ok(None);
        }

        let fields = changes.to_document()?;
        if fields.is_empty() {
            return Ok(Some(UpdateOutcome {
                matched_count: 1,
                modified_count: 0,
            }));
        }

        let outcome = self
            .store
            .update_one(MOVIES, doc! { "_id": id }, fields)
            .await?;

        info!("Movie {} updated", id);
        Ok(Some(outcome))
    }

    pub async fn delete_movie(&self, id: &ObjectId) -> Result<DeleteOutcome, ApiError> {
        let outcome = self.store.delete_one(MOVIES, doc! { "_id": id }).await?;
        info!("Movie {} delete: {} removed", id, outcome.deleted_count);
        Ok(outcome)
    }
}
