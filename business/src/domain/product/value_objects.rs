use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Conjunctive query filters. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFilters {
    /// Inclusive price lower bound.
    pub min_price: Option<BigDecimal>,
    /// Inclusive price upper bound.
    pub max_price: Option<BigDecimal>,
    /// Case-insensitive substring match on the product name.
    pub name: Option<String>,
    /// Exact status match.
    pub status: Option<bool>,
}

/// Partial update: only present fields are written. `updated_at` is always
/// refreshed, even when every other field is absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductPatch {
    pub quantity: Option<u32>,
    pub price: Option<BigDecimal>,
    pub status: Option<bool>,
    pub updated_at: DateTime<Utc>,
}
