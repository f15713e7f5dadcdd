use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{Listing, ListingId, UserId};

/// Ordered, read-only collection of listings.
///
/// The catalog is supplied from outside the engine and never mutated by it.
/// Presentation order is the order listings were loaded in.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    /// Load a catalog from a JSON file containing an array of listings
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read catalog file {}", path.display()))?;
        let listings: Vec<Listing> =
            serde_json::from_str(&json).context("Failed to parse catalog JSON")?;
        Ok(Self::new(listings))
    }

    /// Save the catalog as pretty-printed JSON
    pub async fn save_json_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.listings)?;
        tokio::fs::write(path, json)
            .await
            .with_context(|| format!("Failed to write catalog file {}", path.display()))?;
        Ok(())
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn contains(&self, id: ListingId) -> bool {
        self.get(id).is_some()
    }

    /// Look up several listings at once, preserving the order of `ids`.
    /// Unknown ids are skipped.
    pub fn by_ids(&self, ids: &[ListingId]) -> Vec<&Listing> {
        ids.iter().filter_map(|id| self.get(*id)).collect()
    }

    /// All listings published by one owner, in catalog order
    pub fn owned_by(&self, owner_id: UserId) -> Vec<&Listing> {
        self.listings
            .iter()
            .filter(|listing| listing.owner_id == owner_id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Demo catalog of campus lodges used by the demo binary and tests
pub fn demo_listings() -> Vec<Listing> {
    vec![
        Listing {
            id: 101,
            name: "Sunrise Lodge".to_string(),
            location: "College Road, 0.5km from the main gate".to_string(),
            price_per_month: 150_000,
            verified: true,
            amenities: vec![
                "Electricity".to_string(),
                "Water".to_string(),
                "Wi-Fi".to_string(),
                "Security".to_string(),
                "Parking".to_string(),
            ],
            images: vec!["/images/sunrise-lodge-exterior.jpg".to_string()],
            description: "Well-maintained lodge with 24/7 security and reliable power."
                .to_string(),
            distance: Some("0.5km from main gate".to_string()),
            owner_id: 1,
        },
        Listing {
            id: 102,
            name: "Cedar Hostel".to_string(),
            location: "Market Road, 1.2km from campus".to_string(),
            price_per_month: 120_000,
            verified: false,
            amenities: vec!["Water".to_string(), "Electricity".to_string()],
            images: vec!["/images/cedar-hostel.jpg".to_string()],
            description: "Affordable rooms close to campus. Basic amenities provided."
                .to_string(),
            distance: Some("1.2km from campus".to_string()),
            owner_id: 1,
        },
        Listing {
            id: 103,
            name: "Willow Court".to_string(),
            location: "University Road, 0.8km from the library".to_string(),
            price_per_month: 180_000,
            verified: true,
            amenities: vec![
                "Electricity".to_string(),
                "Water".to_string(),
                "Wi-Fi".to_string(),
                "Security".to_string(),
                "Gym".to_string(),
                "Laundry".to_string(),
            ],
            images: vec!["/images/willow-court.jpg".to_string()],
            description: "Premium residence with gym and study lounges. All-inclusive."
                .to_string(),
            distance: Some("0.8km from library".to_string()),
            owner_id: 2,
        },
        Listing {
            id: 104,
            name: "Stadium View Apartments".to_string(),
            location: "Stadium Road, 0.3km from the sports complex".to_string(),
            price_per_month: 135_000,
            verified: true,
            amenities: vec![
                "Electricity".to_string(),
                "Water".to_string(),
                "Wi-Fi".to_string(),
                "Security".to_string(),
            ],
            images: vec!["/images/stadium-view.jpg".to_string()],
            description: "Quiet and secure, next to the sports facilities.".to_string(),
            distance: Some("0.3km from sports complex".to_string()),
            owner_id: 2,
        },
        Listing {
            id: 105,
            name: "Scholars Rest".to_string(),
            location: "Town Road, 0.6km from the main campus".to_string(),
            price_per_month: 165_000,
            verified: true,
            amenities: vec![
                "Electricity".to_string(),
                "Water".to_string(),
                "Wi-Fi".to_string(),
                "Security".to_string(),
                "Study Room".to_string(),
            ],
            images: vec!["/images/scholars-rest.jpg".to_string()],
            description: "Quiet hours enforced, dedicated study spaces.".to_string(),
            distance: Some("0.6km from main campus".to_string()),
            owner_id: 1,
        },
    ]
}
