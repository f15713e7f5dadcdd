//! Matching and booking state engine.
//!
//! Owns the per-renter decision state (matched / rejected / undecided), the
//! bounded compare selection, and the append-only booking log. Invariants:
//!
//! - A decision is terminal: once a listing is matched or rejected for a
//!   renter it never returns to the undecided pool and never flips.
//! - The undecided pool is always recomputed as catalog minus matched minus
//!   rejected, in stable catalog order.
//! - The compare selection only holds matched listings and never grows past
//!   the configured bound.
//!
//! All mutation of decision, selection, and booking state goes through this
//! module; nothing else touches it.

pub mod error;

pub use error::EngineError;

use std::collections::HashMap;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::models::{Booking, BookingStatus, Listing, ListingId, SwipeDirection, UserId};
use crate::payment::{PaymentDetails, PaymentProcessor};
use crate::pricing::{price_breakdown, LeaseTerm};

/// Tunables for the engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum number of listings in a compare selection
    pub compare_bound: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { compare_bound: 3 }
    }
}

/// What a `decide` call actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecideOutcome {
    /// The decision was recorded
    Recorded,
    /// The listing already had a terminal decision; nothing changed
    AlreadyDecided,
}

/// What a `toggle_compare` call actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareToggle {
    Added,
    Removed,
    /// The selection is at the bound; the add was ignored
    SelectionFull,
}

/// Decision and selection state for one renter
#[derive(Debug, Clone, Default)]
struct RenterState {
    /// Listings the renter accepted, in swipe order
    matched: Vec<ListingId>,
    /// Listings the renter rejected, in swipe order
    rejected: Vec<ListingId>,
    /// Compare selection, in the order listings were picked
    compare: Vec<ListingId>,
}

impl RenterState {
    fn is_decided(&self, id: ListingId) -> bool {
        self.matched.contains(&id) || self.rejected.contains(&id)
    }
}

/// The matching and booking engine for one browsing session.
pub struct MatchEngine {
    config: EngineConfig,
    catalog: Catalog,
    renters: HashMap<UserId, RenterState>,
    bookings: Vec<Booking>,
    next_booking_id: u64,
}

impl MatchEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, EngineConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: EngineConfig) -> Self {
        Self {
            config,
            catalog,
            renters: HashMap::new(),
            bookings: Vec::new(),
            next_booking_id: 1,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -- decisions ---------------------------------------------------------

    /// Record a renter's accept/reject verdict on a listing.
    ///
    /// Re-deciding an already-decided listing changes nothing and reports
    /// `AlreadyDecided`, so duplicate submissions are harmless. An id that
    /// names nothing in the catalog is an error, not a no-op.
    pub fn decide(
        &mut self,
        renter_id: UserId,
        listing_id: ListingId,
        direction: SwipeDirection,
    ) -> Result<DecideOutcome, EngineError> {
        if !self.catalog.contains(listing_id) {
            return Err(EngineError::UnknownListing(listing_id));
        }

        let state = self.renters.entry(renter_id).or_default();
        if state.is_decided(listing_id) {
            debug!(
                "renter {} already decided listing {}, ignoring",
                renter_id, listing_id
            );
            return Ok(DecideOutcome::AlreadyDecided);
        }

        match direction {
            SwipeDirection::Accept => state.matched.push(listing_id),
            SwipeDirection::Reject => state.rejected.push(listing_id),
        }
        debug!(
            "renter {} decided listing {}: {:?}",
            renter_id, listing_id, direction
        );
        Ok(DecideOutcome::Recorded)
    }

    /// Listings the renter has not decided on yet, in catalog order
    pub fn undecided(&self, renter_id: UserId) -> Vec<&Listing> {
        match self.renters.get(&renter_id) {
            Some(state) => self
                .catalog
                .iter()
                .filter(|listing| !state.is_decided(listing.id))
                .collect(),
            None => self.catalog.iter().collect(),
        }
    }

    /// Listings the renter accepted, in swipe order
    pub fn matched(&self, renter_id: UserId) -> Vec<&Listing> {
        self.catalog.by_ids(self.matched_ids(renter_id))
    }

    /// Listings the renter rejected, in swipe order
    pub fn rejected(&self, renter_id: UserId) -> Vec<&Listing> {
        match self.renters.get(&renter_id) {
            Some(state) => self.catalog.by_ids(&state.rejected),
            None => Vec::new(),
        }
    }

    pub fn matched_ids(&self, renter_id: UserId) -> &[ListingId] {
        self.renters
            .get(&renter_id)
            .map(|state| state.matched.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_matched(&self, renter_id: UserId, listing_id: ListingId) -> bool {
        self.matched_ids(renter_id).contains(&listing_id)
    }

    /// How many renters have matched this listing
    pub fn match_count_for_listing(&self, listing_id: ListingId) -> usize {
        self.renters
            .values()
            .filter(|state| state.matched.contains(&listing_id))
            .count()
    }

    // -- compare selection -------------------------------------------------

    /// Add or remove a matched listing from the renter's compare selection.
    ///
    /// Removal is always allowed. An add on a full selection is ignored and
    /// reported as `SelectionFull`; the presentation layer is expected to
    /// disable the control, but the bound is enforced here regardless.
    pub fn toggle_compare(
        &mut self,
        renter_id: UserId,
        listing_id: ListingId,
    ) -> Result<CompareToggle, EngineError> {
        if !self.is_matched(renter_id, listing_id) {
            return Err(EngineError::NotMatched(listing_id));
        }

        let bound = self.config.compare_bound;
        let state = self.renters.entry(renter_id).or_default();

        if let Some(pos) = state.compare.iter().position(|id| *id == listing_id) {
            state.compare.remove(pos);
            return Ok(CompareToggle::Removed);
        }
        if state.compare.len() >= bound {
            return Ok(CompareToggle::SelectionFull);
        }
        state.compare.push(listing_id);
        Ok(CompareToggle::Added)
    }

    /// The renter's current compare selection, in the order it was picked
    pub fn compare_selection(&self, renter_id: UserId) -> &[ListingId] {
        self.renters
            .get(&renter_id)
            .map(|state| state.compare.as_slice())
            .unwrap_or(&[])
    }

    /// Full listing records for the compare selection, in selection order.
    /// Needs at least two selected listings.
    pub fn compare(&self, renter_id: UserId) -> Result<Vec<&Listing>, EngineError> {
        let selection = self.compare_selection(renter_id);
        if selection.len() < 2 {
            return Err(EngineError::InsufficientSelection(selection.len()));
        }
        Ok(self.catalog.by_ids(selection))
    }

    // -- booking -----------------------------------------------------------

    /// Finalize a booking through the given payment processor.
    ///
    /// A renter paying for a listing they never matched is accepted, since
    /// no authorization layer sits in front of the simulated processor, but
    /// the fact is logged. On success exactly one completed booking is
    /// appended to the log and returned.
    pub async fn submit_payment(
        &mut self,
        renter_id: UserId,
        listing_id: ListingId,
        term: LeaseTerm,
        details: &PaymentDetails,
        processor: &dyn PaymentProcessor,
    ) -> Result<Booking, EngineError> {
        let listing = self
            .catalog
            .get(listing_id)
            .ok_or(EngineError::UnknownListing(listing_id))?;
        let listing_name = listing.name.clone();
        let breakdown = price_breakdown(listing.price_per_month, term);

        if !self.is_matched(renter_id, listing_id) {
            warn!(
                "renter {} is paying for listing {} without a match; accepting anyway",
                renter_id, listing_id
            );
        }

        info!(
            "Processing {} payment of {} for '{}' via {}",
            term,
            breakdown.total,
            listing_name,
            processor.name()
        );
        let receipt = processor.process(details, breakdown.total).await?;
        debug!("Payment reference: {}", receipt.reference);

        let booking = Booking {
            id: self.next_booking_id,
            renter_id,
            listing_id,
            lease_term: term,
            amount: breakdown.base,
            service_fee: breakdown.service_fee,
            total: breakdown.total,
            status: BookingStatus::Completed,
            created_at: Utc::now(),
        };
        self.next_booking_id += 1;
        self.bookings.push(booking.clone());

        info!(
            "Booking {} completed: renter {} secured '{}'",
            booking.id, renter_id, listing_name
        );
        Ok(booking)
    }

    /// The full booking log, oldest first
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn bookings_for_listing(&self, listing_id: ListingId) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.listing_id == listing_id)
            .collect()
    }

    pub fn bookings_for_renter(&self, renter_id: UserId) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|booking| booking.renter_id == renter_id)
            .collect()
    }

    /// Restore a previously saved booking log, e.g. across sessions.
    /// New bookings continue numbering after the restored ones.
    pub fn restore_bookings(&mut self, bookings: Vec<Booking>) {
        self.next_booking_id = bookings.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        self.bookings = bookings;
    }
}
