//! `quikcart-search` — debounce-gated search dispatch and result handling.
//!
//! The dispatcher guarantees at most one search call per debounce window of
//! typing inactivity; the view state encodes how each search outcome maps to
//! what the user sees (results, empty state, catalog fallback, notice).

pub mod debounce;
pub mod outcome;

pub use debounce::{PendingSearch, SearchDispatcher, DEBOUNCE_DELAY};
pub use outcome::{Notice, ProductView, SearchOutcome, UNREACHABLE_NOTICE};
