use async_trait::async_trait;
use bson::{Bson, Document, doc};
use futures::TryStreamExt;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use tracing::{error, info, warn};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::{ProductFilters, ProductPatch};

use super::entity::{ProductEntity, decimal_to_bson};

const COLLECTION: &str = "products";

pub struct ProductRepositoryMongo {
    collection: Collection<ProductEntity>,
}

impl ProductRepositoryMongo {
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// Best-effort removal of a partially inserted document. Failures are
    /// swallowed; cleanup must never mask the original error.
    async fn rollback_insert(&self, id: Uuid) {
        match self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await
        {
            Ok(_) => info!("Rollback: removed partially inserted product {}", id),
            Err(e) => warn!("Rollback failed for product {}: {}", id, e),
        }
    }
}

/// Conjunctive filter document: inclusive price range, case-insensitive
/// substring name match, exact status match.
fn build_filter(filters: &ProductFilters) -> Result<Document, RepositoryError> {
    let mut filter = Document::new();

    let mut price = Document::new();
    if let Some(min) = &filters.min_price {
        price.insert("$gte", decimal_to_bson(min)?);
    }
    if let Some(max) = &filters.max_price {
        price.insert("$lte", decimal_to_bson(max)?);
    }
    if !price.is_empty() {
        filter.insert("price", price);
    }

    if let Some(name) = &filters.name {
        // Escaped so user input matches literally instead of as a pattern.
        filter.insert(
            "name",
            doc! { "$regex": regex::escape(name), "$options": "i" },
        );
    }

    if let Some(status) = filters.status {
        filter.insert("status", status);
    }

    Ok(filter)
}

fn build_set(patch: &ProductPatch) -> Result<Document, RepositoryError> {
    let mut set = doc! { "updated_at": bson::DateTime::from_chrono(patch.updated_at) };
    if let Some(quantity) = patch.quantity {
        set.insert("quantity", i64::from(quantity));
    }
    if let Some(price) = &patch.price {
        set.insert("price", decimal_to_bson(price)?);
    }
    if let Some(status) = patch.status {
        set.insert("status", status);
    }
    Ok(set)
}

#[async_trait]
impl ProductRepository for ProductRepositoryMongo {
    async fn insert(&self, product: &Product) -> Result<(), RepositoryError> {
        let entity = ProductEntity::from_domain(product)?;

        let result = self.collection.insert_one(&entity).await.map_err(|e| {
            error!("Error inserting product {}: {}", product.id, e);
            RepositoryError::Insertion
        })?;

        if matches!(result.inserted_id, Bson::Null) {
            // The write may have landed even though no identifier came back.
            self.rollback_insert(product.id).await;
            return Err(RepositoryError::Insertion);
        }

        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = self
            .collection
            .find_one(doc! { "id": id.to_string() })
            .await
            .map_err(|e| {
                error!("Error fetching product {}: {}", id, e);
                RepositoryError::DatabaseError
            })?
            .ok_or(RepositoryError::NotFound)?;

        entity.into_domain()
    }

    async fn query(&self, filters: &ProductFilters) -> Result<Vec<Product>, RepositoryError> {
        let filter = build_filter(filters)?;

        let mut cursor = self.collection.find(filter).await.map_err(|e| {
            error!("Error querying products: {}", e);
            RepositoryError::DatabaseError
        })?;

        let mut products = Vec::new();
        while let Some(entity) = cursor.try_next().await.map_err(|e| {
            error!("Error reading product cursor: {}", e);
            RepositoryError::DatabaseError
        })? {
            products.push(entity.into_domain()?);
        }

        Ok(products)
    }

    async fn update(
        &self,
        id: Uuid,
        patch: &ProductPatch,
    ) -> Result<Option<Product>, RepositoryError> {
        let set = build_set(patch)?;

        let entity = self
            .collection
            .find_one_and_update(doc! { "id": id.to_string() }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| {
                error!("Error updating product {}: {}", id, e);
                RepositoryError::Insertion
            })?;

        match entity {
            Some(entity) => Ok(Some(entity.into_domain()?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, RepositoryError> {
        let result = self
            .collection
            .delete_one(doc! { "id": id.to_string() })
            .await
            .map_err(|e| {
                error!("Error deleting product {}: {}", id, e);
                RepositoryError::DatabaseError
            })?;

        Ok(result.deleted_count)
    }
}
