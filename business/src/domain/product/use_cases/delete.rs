use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    /// `Ok(false)` means the store reported zero deletions despite the
    /// existence check (lost race with a concurrent delete).
    async fn execute(&self, params: DeleteProductParams) -> Result<bool, ProductError>;
}
