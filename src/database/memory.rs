use crate::database::store::{DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process store with the same filter and merge semantics as MongoDB
/// for top-level equality filters. Nothing is persisted.
#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn find_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| matches(d, &filter)))
            .cloned())
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .filter(|d| matches(d, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<Document, StoreError> {
        if !document.contains_key("_id") {
            // Keep `_id` first, the way the server lays out inserted documents.
            let mut with_id = Document::new();
            with_id.insert("_id", ObjectId::new());
            for (key, value) in document {
                with_id.insert(key, value);
            }
            document = with_id;
        }

        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        Ok(document)
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: Document,
        fields: Document,
    ) -> Result<UpdateOutcome, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(target) = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| matches(d, &filter)))
        else {
            return Ok(UpdateOutcome {
                matched_count: 0,
                modified_count: 0,
            });
        };

        let mut changed = false;
        for (key, value) in fields {
            if target.get(&key) != Some(&value) {
                target.insert(key, value);
                changed = true;
            }
        }

        Ok(UpdateOutcome {
            matched_count: 1,
            modified_count: u64::from(changed),
        })
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<DeleteOutcome, StoreError> {
        let mut collections = self.collections.write().await;
        let deleted_count = match collections.get_mut(collection) {
            Some(docs) => match docs.iter().position(|d| matches(d, &filter)) {
                Some(index) => {
                    docs.remove(index);
                    1
                }
                None => 0,
            },
            None => 0,
        };

        Ok(DeleteOutcome { deleted_count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[actix_web::test]
    async fn insert_assigns_id_and_find_one_returns_it() {
        let store = MemoryStore::new();
        let inserted = store
            .insert_one("movies", doc! { "title": "Alien" })
            .await
            .unwrap();
        let id = inserted.get_object_id("_id").unwrap();

        let found = store
            .find_one("movies", doc! { "_id": id })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.get_str("title").unwrap(), "Alien");
    }

    #[actix_web::test]
    async fn find_one_on_missing_collection_is_none() {
        let store = MemoryStore::new();
        let found = store
            .find_one("movies", doc! { "_id": ObjectId::new() })
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[actix_web::test]
    async fn find_many_filters_on_every_key() {
        let store = MemoryStore::new();
        let movie = ObjectId::new();
        store
            .insert_one("comments", doc! { "movie_id": movie, "name": "Ann" })
            .await
            .unwrap();
        store
            .insert_one("comments", doc! { "movie_id": movie, "name": "Bob" })
            .await
            .unwrap();
        store
            .insert_one("comments", doc! { "movie_id": ObjectId::new(), "name": "Ann" })
            .await
            .unwrap();

        let all = store
            .find_many("comments", doc! { "movie_id": movie })
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let ann = store
            .find_many("comments", doc! { "movie_id": movie, "name": "Ann" })
            .await
            .unwrap();
        assert_eq!(ann.len(), 1);
    }

    #[actix_web::test]
    async fn update_merges_and_counts_modifications() {
        let store = MemoryStore::new();
        let inserted = store
            .insert_one("movies", doc! { "title": "Alien", "year": 1979 })
            .await
            .unwrap();
        let filter = doc! { "_id": inserted.get_object_id("_id").unwrap() };

        let outcome = store
            .update_one("movies", filter.clone(), doc! { "title": "Aliens" })
            .await
            .unwrap();
        assert_eq!(
            outcome,
            UpdateOutcome {
                matched_count: 1,
                modified_count: 1
            }
        );

        let unchanged = store
            .update_one("movies", filter.clone(), doc! { "title": "Aliens" })
            .await
            .unwrap();
        assert_eq!(unchanged.modified_count, 0);

        let movie = store.find_one("movies", filter).await.unwrap().unwrap();
        assert_eq!(movie.get_str("title").unwrap(), "Aliens");
        assert_eq!(movie.get_i32("year").unwrap(), 1979);
    }

    #[actix_web::test]
    async fn update_without_match_reports_zero() {
        let store = MemoryStore::new();
        let outcome = store
            .update_one("movies", doc! { "_id": ObjectId::new() }, doc! { "title": "X" })
            .await
            .unwrap();
        assert_eq!(outcome.matched_count, 0);
        assert_eq!(outcome.modified_count, 0);
    }

    #[actix_web::test]
    async fn delete_removes_a_single_match() {
        let store = MemoryStore::new();
        let inserted = store
            .insert_one("movies", doc! { "title": "Alien" })
            .await
            .unwrap();
        let filter = doc! { "_id": inserted.get_object_id("_id").unwrap() };

        let first = store.delete_one("movies", filter.clone()).await.unwrap();
        assert_eq!(first.deleted_count, 1);

        let second = store.delete_one("movies", filter).await.unwrap();
        assert_eq!(second.deleted_count, 0);
    }
}
