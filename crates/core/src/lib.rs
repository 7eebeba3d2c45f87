//! `quikcart-core` — storefront domain primitives.
//!
//! This crate contains **pure domain** types shared by the cart, search and
//! client crates (no HTTP or rendering concerns).

pub mod cart;
pub mod error;
pub mod id;
pub mod product;

pub use cart::{CartEntry, CartLineItem};
pub use error::{DomainError, DomainResult};
pub use id::ProductId;
pub use product::Product;
