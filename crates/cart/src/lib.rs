//! `quikcart-cart` — cart reconciliation and pricing.
//!
//! Pure functions that join the sparse cart-entry list against the product
//! catalog, derive order totals, and gate the add-to-cart path. The
//! presentation layer owns the mutable lists and calls these on each event.

pub mod gate;
pub mod line_items;

pub use gate::{request_add_to_cart, request_quantity_update, CartAddDecision};
pub use line_items::{join_cart, total_distinct_item_count, total_value};
