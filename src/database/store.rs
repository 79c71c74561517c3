use async_trait::async_trait;
use mongodb::bson::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to connect to the document store: {0}")]
    Connection(String),

    #[error("Document store operation failed: {0}")]
    Driver(#[from] mongodb::error::Error),

    #[error("Document store did not return an inserted id")]
    MissingInsertedId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

/// Generic access to a schema-flexible document database.
///
/// Filters are equality constraints on top-level fields. "Nothing matched"
/// is always an empty result or a zero count, never an error; `StoreError`
/// is reserved for connectivity and driver failures.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// First document in `collection` matching `filter`.
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError>;

    /// Every matching document, fully materialized, in store order.
    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError>;

    /// Inserts `document` and returns it with the store-assigned `_id`.
    async fn insert_one(&self, collection: &str, document: Document)
    -> Result<Document, StoreError>;

    /// Merges `fields` into the first match (`$set` semantics). The caller
    /// must leave `_id` out of `fields`.
    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError>;

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteOutcome, StoreError>;
}
