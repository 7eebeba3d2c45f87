//! Add-to-cart mutation gate.

use quikcart_core::{CartEntry, ProductId};

/// Decision on whether a cart mutation may proceed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartAddDecision {
    /// Caller should issue the cart upsert for this product and quantity.
    Proceed {
        product_id: ProductId,
        quantity: u32,
    },

    /// Product is already in the cart; the user edits quantity from the cart
    /// view instead of adding a duplicate line.
    RejectAlreadyPresent,

    /// No signed-in session; caller should prompt login. No network call is
    /// attempted.
    RejectUnauthenticated,
}

/// Gate for the "add new item" path.
///
/// Membership is an exact match on product id, ignoring quantity. Only this
/// path is gated: the explicit quantity-update path from the cart view's
/// stepper bypasses the membership check entirely (see
/// [`request_quantity_update`]). The asymmetry prevents accidental duplicate
/// "add" clicks while still allowing deliberate quantity edits.
pub fn request_add_to_cart(
    is_authenticated: bool,
    entries: &[CartEntry],
    product_id: &ProductId,
    quantity: u32,
) -> CartAddDecision {
    if !is_authenticated {
        return CartAddDecision::RejectUnauthenticated;
    }

    if entries.iter().any(|e| &e.product_id == product_id) {
        return CartAddDecision::RejectAlreadyPresent;
    }

    CartAddDecision::Proceed {
        product_id: product_id.clone(),
        quantity,
    }
}

/// Explicit quantity edit from the cart view's +/- stepper.
///
/// Always proceeds; the product is already in the cart by construction, and
/// a quantity of 0 is how a line is removed.
pub fn request_quantity_update(product_id: &ProductId, quantity: u32) -> CartAddDecision {
    CartAddDecision::Proceed {
        product_id: product_id.clone(),
        quantity,
    }
}
