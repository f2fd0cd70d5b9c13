use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ProductResult;
use crate::models::StoreRecord;

/// Record store access for products
///
/// Implementations talk to a concrete store (Airtable in production).
/// Methods work on raw records; mapping to `Product` happens in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All records, newest `DataCriacao` first, following pagination to the end
    async fn list(&self) -> ProductResult<Vec<StoreRecord>>;

    /// `Ok(None)` when the store has no record with this id
    async fn get(&self, id: &str) -> ProductResult<Option<StoreRecord>>;

    async fn create(&self, fields: Map<String, Value>) -> ProductResult<StoreRecord>;

    /// Partial update: fields not sent are left untouched
    async fn update(&self, id: &str, fields: Map<String, Value>) -> ProductResult<StoreRecord>;

    async fn delete(&self, id: &str) -> ProductResult<()>;
}
