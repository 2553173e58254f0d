use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductFilters;

#[async_trait]
pub trait QueryProductsUseCase: Send + Sync {
    async fn execute(&self, filters: ProductFilters) -> Result<Vec<Product>, ProductError>;
}
