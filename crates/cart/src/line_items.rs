//! Catalog join and derived cart totals.

use quikcart_core::{CartEntry, CartLineItem, Product};

/// Join the sparse cart-entry list against the full product catalog.
///
/// For each entry, the first catalog product whose id matches is merged with
/// the entry's quantity. Entries whose product cannot be found are silently
/// dropped (no error, no placeholder), which means missing products also
/// fall out of the totals. Output preserves cart-entry order, not catalog
/// order. If either input is empty, no join is attempted.
pub fn join_cart(entries: &[CartEntry], catalog: &[Product]) -> Vec<CartLineItem> {
    let mut items = Vec::new();
    if entries.is_empty() || catalog.is_empty() {
        return items;
    }

    for entry in entries {
        if let Some(product) = catalog.iter().find(|p| p.id == entry.product_id) {
            items.push(CartLineItem::merge(product, entry));
        }
    }

    items
}

/// Total order value: Σ cost × quantity. An empty cart totals 0.
///
/// Saturates at `u64::MAX` rather than overflowing on pathological catalog
/// costs.
pub fn total_value(items: &[CartLineItem]) -> u64 {
    items.iter().fold(0u64, |total, item| {
        total.saturating_add(item.cost.saturating_mul(u64::from(item.quantity)))
    })
}

/// Count of line items carrying a non-empty product id.
///
/// Joined items always carry one, so this equals the item count in practice;
/// the separate counting pass is kept deliberately rather than collapsed to
/// `items.len()`.
pub fn total_distinct_item_count(items: &[CartLineItem]) -> usize {
    items
        .iter()
        .filter(|item| !item.product_id.is_empty())
        .count()
}
