use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pricing::LeaseTerm;

/// Catalog key for a listing
pub type ListingId = u32;

/// Identifier for a renter or owner account
pub type UserId = u32;

/// Role attached to the current session user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Renter,
    Owner,
}

/// The user behind the current session, as reported by the identity seam.
/// The engine trusts this value without independent verification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub location: String,
    /// Rent per month in whole currency units
    pub price_per_month: i64,
    pub verified: bool,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
    /// Walking distance to campus, e.g. "0.5km from main gate"
    pub distance: Option<String>,
    pub owner_id: UserId,
}

/// A renter's verdict on a single listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Swipe right: keep the listing as a match
    Accept,
    /// Swipe left: drop the listing for good
    Reject,
}

/// Outcome of a finalized booking.
///
/// The simulated processor cannot decline, so every booking lands here as
/// `Completed`. A real processor would introduce declined and timed-out
/// variants.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Completed,
}

/// Finalized booking record, appended once per successful payment.
/// Never mutated or deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: u64,
    pub renter_id: UserId,
    pub listing_id: ListingId,
    pub lease_term: LeaseTerm,
    /// Rent for the full term, before the service fee
    pub amount: i64,
    pub service_fee: i64,
    /// `amount + service_fee`, the sum the renter actually paid
    pub total: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// The share of the total attributed to the listing owner.
    pub fn owner_revenue(&self) -> i64 {
        self.total - self.service_fee
    }
}
