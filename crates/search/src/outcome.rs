//! Search outcomes and the products-view state they drive.

use quikcart_core::Product;

/// What the user should be told, transiently, about a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice(pub String);

/// Notice shown when the backend gives no response at all.
pub const UNREACHABLE_NOTICE: &str =
    "Something went wrong. Check that the backend is running, reachable and returns valid JSON.";

/// Result of one search call, distinguishable by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Matching products to display.
    Results(Vec<Product>),

    /// Empty-result condition (HTTP 404). Shown as an empty state, not an
    /// error.
    NotFound,

    /// The backend answered with a failure (HTTP 500). The view falls back
    /// to the last-known full catalog.
    ServerError(String),

    /// No response at all. Surfaced as a user-visible notice; the visible
    /// list is left as-is.
    Unreachable,
}

/// View state for the products screen.
///
/// Holds the full catalog plus the currently visible (possibly filtered)
/// slice. Both lists are replaced wholesale after each completed external
/// call; nothing is patched in place, and there is one writer per screen so
/// no locking is needed. Outstanding requests are not cancelled; the last
/// response to arrive wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductView {
    catalog: Vec<Product>,
    visible: Vec<Product>,
}

impl ProductView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly fetched catalog; the visible list starts unfiltered.
    pub fn replace_catalog(&mut self, products: Vec<Product>) {
        self.visible = products.clone();
        self.catalog = products;
    }

    /// Apply one search outcome, returning the transient notice to show, if
    /// any.
    pub fn apply_search_outcome(&mut self, outcome: SearchOutcome) -> Option<Notice> {
        match outcome {
            SearchOutcome::Results(products) => {
                self.visible = products;
                None
            }
            SearchOutcome::NotFound => {
                // Empty state, not an error.
                self.visible = Vec::new();
                None
            }
            SearchOutcome::ServerError(message) => {
                self.visible = self.catalog.clone();
                Some(Notice(message))
            }
            SearchOutcome::Unreachable => Some(Notice(UNREACHABLE_NOTICE.to_string())),
        }
    }

    /// Products currently on screen.
    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Last-known full catalog.
    pub fn catalog(&self) -> &[Product] {
        &self.catalog
    }
}
