use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::{ProductFilters, ProductPatch};

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts one new document. The adapter must report `Insertion` when the
    /// store yields no generated identifier, rolling back any partial write.
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn query(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError>;
    /// Applies the patch atomically and returns the post-image, or `None`
    /// when no document matched at write time.
    async fn update(
        &self,
        id: Uuid,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, RepositoryError>;
    /// Returns the number of deleted documents.
    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
}
