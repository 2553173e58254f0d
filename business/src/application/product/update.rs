use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};
use crate::domain::product::value_objects::ProductPatch;

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        if let Some(price) = &params.price
            && *price < BigDecimal::from(0)
        {
            return Err(ProductError::PriceNegative);
        }

        // Verify product exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let patch = ProductPatch {
            quantity: params.quantity,
            price: params.price,
            status: params.status,
            updated_at: chrono::Utc::now(),
        };

        // The write can still miss if a concurrent delete won the race between
        // the existence check and this call.
        let updated = self
            .repository
            .update(params.id, &patch)
            .await
            .map_err(|e| match e {
                RepositoryError::Insertion => ProductError::Insertion,
                other => ProductError::Repository(other),
            })?
            .ok_or(ProductError::Insertion)?;

        self.logger
            .info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}
