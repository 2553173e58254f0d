use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::query::QueryProductsUseCase;
use crate::domain::product::value_objects::ProductFilters;

pub struct QueryProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl QueryProductsUseCase for QueryProductsUseCaseImpl {
    async fn execute(&self, filters: ProductFilters) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Querying products");
        let products = self.repository.query(&filters).await?;
        self.logger
            .info(&format!("Query matched {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::value_objects::ProductPatch;
    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use mockall::mock;
    use std::str::FromStr;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn insert(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn query(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError>;
            async fn update(&self, id: Uuid, patch: &ProductPatch) -> Result<Option<Product>, RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_pass_filters_through_to_repository() {
        let mut mock_repo = MockProductRepo::new();
        let now = Utc::now();
        mock_repo
            .expect_query()
            .withf(|filters| {
                filters.min_price == Some(BigDecimal::from(5))
                    && filters.name.as_deref() == Some("oil")
            })
            .returning(move |_| {
                Ok(vec![Product::from_repository(
                    Uuid::new_v4(),
                    "Olive Oil".to_string(),
                    3,
                    BigDecimal::from_str("12.50").unwrap(),
                    true,
                    now,
                    now,
                )])
            });

        let use_case = QueryProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ProductFilters {
                min_price: Some(BigDecimal::from(5)),
                max_price: None,
                name: Some("oil".to_string()),
                status: None,
            })
            .await;

        assert!(result.is_ok());
        let products = result.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Olive Oil");
    }

    #[tokio::test]
    async fn should_return_empty_list_when_nothing_matches() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_query().returning(|_| Ok(vec![]));

        let use_case = QueryProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(ProductFilters::default()).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_wrap_repository_errors() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_query()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = QueryProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(ProductFilters::default()).await;

        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ProductError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
