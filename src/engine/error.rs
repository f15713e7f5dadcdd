use thiserror::Error;

use crate::models::ListingId;
use crate::payment::PaymentError;

/// Invariant violations detected by the engine.
///
/// Idempotent no-ops (repeating a decision, adding to a full compare
/// selection) are NOT errors; they come back as successful outcomes so the
/// caller can tell nothing changed.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The listing id names nothing in the catalog
    #[error("listing {0} is not in the catalog")]
    UnknownListing(ListingId),

    /// Compare selection only accepts listings the renter has matched
    #[error("listing {0} is not in the renter's matched set")]
    NotMatched(ListingId),

    /// Side-by-side comparison needs at least two selected listings
    #[error("comparison needs at least 2 selected listings, have {0}")]
    InsufficientSelection(usize),

    #[error("payment failed")]
    Payment(#[from] PaymentError),
}
