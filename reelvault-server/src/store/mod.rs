//! Document-store seam for catalog records.
//!
//! Records are append-only within this service: the trait exposes reads and
//! a single insert, no update or delete. Documents cross the seam as raw
//! [`serde_json::Value`]s so pass-through fields survive verbatim.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use reelvault_model::{PageRequest, TitleFilters};

pub use memory::MemoryTitleStore;
pub use postgres::PostgresTitleStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid document: {0}")]
    InvalidDocument(String),
}

/// Port onto the document store holding catalog records.
#[async_trait]
pub trait TitleStore: Send + Sync {
    /// Records matching the conjunction of supplied filters, ordered by
    /// `created_at` descending. No pagination on this path.
    async fn find(&self, filters: &TitleFilters) -> Result<Vec<Value>, StoreError>;

    /// One page of records ordered by `created_at` descending.
    async fn list(&self, page: &PageRequest) -> Result<Vec<Value>, StoreError>;

    /// Total record count. Runs as a separate round-trip from [`list`] and
    /// is not guaranteed consistent with it under concurrent writes.
    ///
    /// [`list`]: TitleStore::list
    async fn count(&self) -> Result<i64, StoreError>;

    /// Persist one record verbatim.
    async fn insert(&self, doc: &Value) -> Result<(), StoreError>;
}
