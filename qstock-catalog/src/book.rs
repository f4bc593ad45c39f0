use std::collections::HashSet;
use uuid::Uuid;
use tracing::debug;

use crate::listing::NetworkPart;
use crate::search::{self, SearchFilter};

/// In-memory collection of marketplace listings, in insertion order
#[derive(Debug, Clone, Default)]
pub struct ListingBook {
    listings: Vec<NetworkPart>,
    revealed_contacts: HashSet<Uuid>,
}

impl ListingBook {
    pub fn from_listings(listings: Vec<NetworkPart>) -> Self {
        Self {
            listings,
            revealed_contacts: HashSet::new(),
        }
    }

    pub fn get(&self, listing_id: &Uuid) -> Option<&NetworkPart> {
        self.listings.iter().find(|l| l.id == *listing_id)
    }

    pub fn all(&self) -> &[NetworkPart] {
        &self.listings
    }

    pub fn search(&self, filter: &SearchFilter, min_query_chars: usize) -> Vec<NetworkPart> {
        filter.apply(&self.listings, min_query_chars)
    }

    pub fn cities(&self) -> Vec<String> {
        search::available_cities(&self.listings)
    }

    /// Listings owned by the named seller ("my products")
    pub fn sold_by(&self, seller_name: &str) -> Vec<NetworkPart> {
        self.listings
            .iter()
            .filter(|l| l.is_sold_by(seller_name))
            .cloned()
            .collect()
    }

    /// Replace a listing's price, returning the previous one
    pub fn update_price(&mut self, listing_id: &Uuid, new_price: f64) -> Result<f64, CatalogError> {
        if !new_price.is_finite() || new_price <= 0.0 {
            return Err(CatalogError::InvalidPrice(new_price));
        }

        let listing = self.listings.iter_mut()
            .find(|l| l.id == *listing_id)
            .ok_or_else(|| CatalogError::NotFound(listing_id.to_string()))?;

        let old_price = listing.price;
        listing.price = new_price;
        debug!("Listing {} repriced {} -> {}", listing_id, old_price, new_price);

        Ok(old_price)
    }

    /// Mark a seller's phone as shown to the buyer for this session
    pub fn reveal_contact(&mut self, listing_id: &Uuid) -> Result<&NetworkPart, CatalogError> {
        let index = self.listings.iter()
            .position(|l| l.id == *listing_id)
            .ok_or_else(|| CatalogError::NotFound(listing_id.to_string()))?;

        self.revealed_contacts.insert(*listing_id);
        Ok(&self.listings[index])
    }

    pub fn is_contact_revealed(&self, listing_id: &Uuid) -> bool {
        self.revealed_contacts.contains(listing_id)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Listing not found: {0}")]
    NotFound(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Spare part network is not active")]
    NetworkInactive,
}
