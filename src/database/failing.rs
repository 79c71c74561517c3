use crate::database::{DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
use async_trait::async_trait;
use mongodb::bson::Document;

/// Answers every call the way an unreachable server would.
pub struct FailingStore;

fn refused() -> StoreError {
    StoreError::Connection("connection refused".to_string())
}

#[async_trait]
impl DocumentStore for FailingStore {
    async fn find_one(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        Err(refused())
    }

    async fn find_many(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        Err(refused())
    }

    async fn insert_one(
        &self,
        _collection: &str,
        _document: Document,
    ) -> Result<Document, StoreError> {
        Err(refused())
    }

    async fn update_one(
        &self,
        _collection: &str,
        _filter: Document,
        _fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        Err(refused())
    }

    async fn delete_one(
        &self,
        _collection: &str,
        _filter: Document,
    ) -> Result<DeleteOutcome, StoreError> {
        Err(refused())
    }
}
