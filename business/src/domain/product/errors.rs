#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.price_negative")]
    PriceNegative,
    #[error("product.not_found")]
    NotFound,
    #[error("product.insertion_failed")]
    Insertion,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
