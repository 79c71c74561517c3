use crate::database::store::{DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
use crate::utils::config::MongoConfig;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{error, info};
use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection, Database, options::ClientOptions};
use tokio::sync::OnceCell;

/// MongoDB-backed store. The client is created on first use and shared by
/// every later call; concurrent first callers wait on the same connect.
pub struct MongoStore {
    config: MongoConfig,
    client: OnceCell<Client>,
}

impl MongoStore {
    pub fn new(config: MongoConfig) -> Self {
        MongoStore {
            config,
            client: OnceCell::new(),
        }
    }

    async fn connect(config: &MongoConfig) -> Result<Client, StoreError> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        // Ping the server to see if you can connect to the cluster
        client
            .database("admin")
            .run_command(doc! {"ping": 1})
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!("Connected successfully to MongoDB");

        Ok(client)
    }

    async fn database(&self) -> Result<Database, StoreError> {
        let client = self
            .client
            .get_or_try_init(|| async {
                Self::connect(&self.config).await.map_err(|e| {
                    error!("Failed to initialize database: {}", e);
                    e
                })
            })
            .await?;

        Ok(client.database(&self.config.database))
    }

    async fn collection(&self, name: &str) -> Result<Collection<Document>, StoreError> {
        Ok(self.database().await?.collection::<Document>(name))
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let document = self.collection(collection).await?.find_one(filter).await?;
        Ok(document)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let cursor = self.collection(collection).await?.find(filter).await?;
        let documents: Vec<Document> = cursor.try_collect().await?;
        Ok(documents)
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<Document, StoreError> {
        let result = self
            .collection(collection)
            .await?
            .insert_one(&document)
            .await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId)?;
        document.insert("_id", id);

        Ok(document)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let result = self
            .collection(collection)
            .await?
            .update_one(filter, doc! { "$set": fields })
            .await?;

        Ok(UpdateOutcome {
            matched_count: result.matched_count,
            modified_count: result.modified_count,
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteOutcome, StoreError> {
        let result = self
            .collection(collection)
            .await?
            .delete_one(filter)
            .await?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }
}
