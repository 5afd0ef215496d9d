use thiserror::Error;

use treadquote_store::StoreError;

/// Errors surfaced by the comparison engine.
///
/// Store failures propagate unchanged — no intermediate layer swallows
/// them — so the outermost caller decides how to present a failed search.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A fetch failed at some stage; the whole search aborts with no
    /// partial results.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The caller supplied a quantity of zero. Rejected explicitly rather
    /// than guessing a default.
    #[error("quantity must be a positive integer, got {0}")]
    InvalidQuantity(u32),
}
