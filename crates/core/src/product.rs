//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::id::ProductId;

/// A purchasable product as served by the external catalog service.
///
/// The catalog owns these records; this crate only reads them. The wire name
/// for the id field is `_id` (server JSON), kept via a serde rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ProductId,

    /// Display name or title.
    pub name: String,

    /// Category the product is listed under.
    pub category: String,

    /// Price in whole currency units, as served by the catalog.
    pub cost: u64,

    /// Aggregate rating, integer out of five.
    pub rating: u8,

    /// URL of the product image.
    pub image: String,
}
