use serde::Serialize;

use crate::engine::MatchEngine;
use crate::models::{BookingStatus, ListingId, UserId};

/// Headline numbers for an owner's dashboard
#[derive(Debug, Clone, Serialize)]
pub struct OwnerStats {
    pub listing_count: usize,
    /// Matches across all renters that landed on this owner's listings
    pub total_matches: usize,
    /// Sum of booking totals minus the platform's service fee
    pub total_earnings: i64,
}

/// Per-listing numbers for an owner's dashboard
#[derive(Debug, Clone, Serialize)]
pub struct ListingStats {
    pub listing_id: ListingId,
    pub name: String,
    pub match_count: usize,
    pub booking_count: usize,
    /// Earnings attributed to this listing, net of service fees
    pub revenue: i64,
}

/// Aggregate the owner's headline numbers from the engine state
pub fn owner_stats(engine: &MatchEngine, owner_id: UserId) -> OwnerStats {
    let listings = engine.catalog().owned_by(owner_id);

    let total_matches = listings
        .iter()
        .map(|listing| engine.match_count_for_listing(listing.id))
        .sum();

    let total_earnings = listings
        .iter()
        .map(|listing| {
            engine
                .bookings_for_listing(listing.id)
                .iter()
                .filter(|booking| booking.status == BookingStatus::Completed)
                .map(|booking| booking.owner_revenue())
                .sum::<i64>()
        })
        .sum();

    OwnerStats {
        listing_count: listings.len(),
        total_matches,
        total_earnings,
    }
}

/// Per-listing breakdown of the same numbers, in catalog order
pub fn listing_stats(engine: &MatchEngine, owner_id: UserId) -> Vec<ListingStats> {
    engine
        .catalog()
        .owned_by(owner_id)
        .into_iter()
        .map(|listing| {
            let bookings = engine.bookings_for_listing(listing.id);
            let completed: Vec<_> = bookings
                .iter()
                .filter(|booking| booking.status == BookingStatus::Completed)
                .collect();
            ListingStats {
                listing_id: listing.id,
                name: listing.name.clone(),
                match_count: engine.match_count_for_listing(listing.id),
                booking_count: completed.len(),
                revenue: completed.iter().map(|booking| booking.owner_revenue()).sum(),
            }
        })
        .collect()
}
