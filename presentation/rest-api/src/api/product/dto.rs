use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::product::model::Product;

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Units in stock
    pub quantity: u32,
    /// Price as a decimal string, e.g. "9.99"
    pub price: String,
    /// Active flag
    pub status: bool,
}

/// Partial update: absent fields are left untouched.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    /// Units in stock
    #[oai(skip_serializing_if_is_none)]
    pub quantity: Option<u32>,
    /// Price as a decimal string, e.g. "12.50"
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    /// Active flag
    #[oai(skip_serializing_if_is_none)]
    pub status: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    /// Product name
    pub name: String,
    /// Units in stock
    pub quantity: u32,
    /// Price as a decimal string
    pub price: String,
    /// Active flag
    pub status: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            quantity: product.quantity,
            price: product.price.to_string(),
            status: product.status,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}
