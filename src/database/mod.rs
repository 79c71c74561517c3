pub mod db;
#[cfg(test)]
pub mod failing;
pub mod memory;
pub mod store;

pub use db::MongoStore;
pub use memory::MemoryStore;
pub use store::{DeleteOutcome, DocumentStore, StoreError, UpdateOutcome};
