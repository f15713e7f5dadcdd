use anyhow::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::models::{Booking, ListingId, User};
use crate::storage::traits::KeyValueStore;
use crate::storage::{BOOKINGS_KEY, FAVORITES_KEY, USER_KEY};

/// Typed accessors over the raw key-value store: favorites, the current
/// session user, and the saved booking log.
///
/// Reads never fail: a missing or corrupt record comes back as the empty
/// default. Writes propagate IO errors.
pub struct SessionStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn inner(&self) -> &S {
        &self.store
    }

    async fn read_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key).await {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!("Discarding corrupt record under '{}': {}", key, err);
                    T::default()
                }
            },
            Ok(None) => T::default(),
            Err(err) => {
                warn!("Could not read '{}', treating as absent: {}", key, err);
                T::default()
            }
        }
    }

    async fn write<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.store.set(key, &json).await
    }

    // -- favorites ---------------------------------------------------------

    pub async fn favorites(&self) -> Vec<ListingId> {
        self.read_or_default(FAVORITES_KEY).await
    }

    pub async fn is_favorite(&self, listing_id: ListingId) -> bool {
        self.favorites().await.contains(&listing_id)
    }

    pub async fn add_favorite(&self, listing_id: ListingId) -> Result<()> {
        let mut favorites = self.favorites().await;
        if !favorites.contains(&listing_id) {
            favorites.push(listing_id);
            self.write(FAVORITES_KEY, &favorites).await?;
        }
        Ok(())
    }

    pub async fn remove_favorite(&self, listing_id: ListingId) -> Result<()> {
        let mut favorites = self.favorites().await;
        favorites.retain(|id| *id != listing_id);
        self.write(FAVORITES_KEY, &favorites).await
    }

    /// Flip a listing in or out of the favorites list.
    /// Returns whether the listing is a favorite afterwards.
    pub async fn toggle_favorite(&self, listing_id: ListingId) -> Result<bool> {
        if self.is_favorite(listing_id).await {
            self.remove_favorite(listing_id).await?;
            Ok(false)
        } else {
            self.add_favorite(listing_id).await?;
            Ok(true)
        }
    }

    // -- session user ------------------------------------------------------

    pub async fn current_user(&self) -> Option<User> {
        self.read_or_default(USER_KEY).await
    }

    pub async fn set_current_user(&self, user: &User) -> Result<()> {
        self.write(USER_KEY, user).await
    }

    /// Log out: drop the stored session user
    pub async fn clear_user(&self) -> Result<()> {
        self.store.remove(USER_KEY).await
    }

    // -- booking log -------------------------------------------------------

    pub async fn saved_bookings(&self) -> Vec<Booking> {
        self.read_or_default(BOOKINGS_KEY).await
    }

    pub async fn save_bookings(&self, bookings: &[Booking]) -> Result<()> {
        self.write(BOOKINGS_KEY, &bookings).await
    }
}
