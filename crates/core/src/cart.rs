//! Cart entry and joined line-item types.

use serde::{Deserialize, Serialize};

use crate::id::ProductId;
use crate::product::Product;

/// Server-authoritative pairing of a product id and a quantity.
///
/// The core never persists these; it only transforms the list the backend
/// returns. Wire names are `productId` and `qty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntry {
    #[serde(rename = "productId")]
    pub product_id: ProductId,

    #[serde(rename = "qty")]
    pub quantity: u32,
}

impl CartEntry {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// A cart entry enriched with its product's display attributes.
///
/// Transient join result for rendering: recomputed on every catalog or
/// cart-entry change, never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: ProductId,
    pub name: String,
    pub category: String,
    pub cost: u64,
    pub rating: u8,
    pub image: String,
    pub quantity: u32,
}

impl CartLineItem {
    /// Merge a catalog product with the cart entry that references it.
    pub fn merge(product: &Product, entry: &CartEntry) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            cost: product.cost,
            rating: product.rating,
            image: product.image.clone(),
            quantity: entry.quantity,
        }
    }
}
