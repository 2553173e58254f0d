use std::str::FromStr;

use bigdecimal::BigDecimal;
use bson::Decimal128;
use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;

/// Persisted document shape. `_id` stays internal to the store; every lookup
/// keys on the `id` uuid field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductEntity {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none", default)]
    pub object_id: Option<ObjectId>,
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal128,
    pub status: bool,
    pub created_at: bson::DateTime,
    pub updated_at: bson::DateTime,
}

impl ProductEntity {
    pub fn from_domain(product: &Product) -> Result<Self, RepositoryError> {
        Ok(Self {
            object_id: None,
            id: product.id.to_string(),
            name: product.name.clone(),
            quantity: product.quantity,
            price: decimal_to_bson(&product.price)?,
            status: product.status,
            created_at: bson::DateTime::from_chrono(product.created_at),
            updated_at: bson::DateTime::from_chrono(product.updated_at),
        })
    }

    pub fn into_domain(self) -> Result<Product, RepositoryError> {
        let id = Uuid::parse_str(&self.id).map_err(|_| RepositoryError::DatabaseError)?;
        let price = decimal_from_bson(&self.price)?;

        Ok(Product::from_repository(
            id,
            self.name,
            self.quantity,
            price,
            self.status,
            self.created_at.to_chrono(),
            self.updated_at.to_chrono(),
        ))
    }
}

/// Prices cross the BSON boundary as decimal strings; a binary float never
/// carries the value in either direction.
pub fn decimal_to_bson(value: &BigDecimal) -> Result<Decimal128, RepositoryError> {
    Decimal128::from_str(&value.to_string()).map_err(|_| RepositoryError::DatabaseError)
}

pub fn decimal_from_bson(value: &Decimal128) -> Result<BigDecimal, RepositoryError> {
    BigDecimal::from_str(&value.to_string()).map_err(|_| RepositoryError::DatabaseError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_product(price: &str) -> Product {
        let now = Utc::now();
        Product::from_repository(
            Uuid::new_v4(),
            "Widget".to_string(),
            5,
            BigDecimal::from_str(price).unwrap(),
            true,
            now,
            now,
        )
    }

    #[test]
    fn should_round_trip_product_through_entity() {
        let product = make_product("9.99");

        let entity = ProductEntity::from_domain(&product).unwrap();
        let restored = entity.into_domain().unwrap();

        assert_eq!(restored.id, product.id);
        assert_eq!(restored.name, product.name);
        assert_eq!(restored.quantity, product.quantity);
        assert_eq!(restored.price, product.price);
        assert_eq!(restored.status, product.status);
    }

    #[test]
    fn should_preserve_decimal_digits_through_conversion() {
        let price = BigDecimal::from_str("12.50").unwrap();

        let stored = decimal_to_bson(&price).unwrap();
        let restored = decimal_from_bson(&stored).unwrap();

        assert_eq!(restored.to_string(), "12.50");
    }

    #[test]
    fn should_reject_non_numeric_stored_price() {
        let stored = Decimal128::from_str("NaN").unwrap();

        let result = decimal_from_bson(&stored);

        assert!(matches!(result.unwrap_err(), RepositoryError::DatabaseError));
    }

    #[test]
    fn should_reject_malformed_stored_id() {
        let product = make_product("1.00");
        let mut entity = ProductEntity::from_domain(&product).unwrap();
        entity.id = "not-a-uuid".to_string();

        let result = entity.into_domain();

        assert!(matches!(result.unwrap_err(), RepositoryError::DatabaseError));
    }
}
