use serde::{Deserialize, Serialize};
use uuid::Uuid;
use qstock_shared::Contact;

/// Classification of a part's provenance
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BrandClass {
    /// Factory part from the vehicle manufacturer
    Original,
    /// Generic aftermarket part
    Commercial,
    /// Third-party original-equipment equivalent
    Oem,
}

/// Externally computed market aggregates for a listing. Read-only from the seller's side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketStats {
    pub average_price: Option<f64>,
    pub lowest_price: Option<f64>,
    pub impressions: Option<u64>,
    pub local_search_count: Option<u64>,
    pub national_search_count: Option<u64>,
    pub last_purchase_price: Option<f64>,
    pub good_price_votes: Option<u32>,
    pub bad_price_votes: Option<u32>,
}

/// A seller's advertised part in the network marketplace
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkPart {
    pub id: Uuid,
    pub part_number: String,
    pub part_name: String,
    pub brand: String,
    pub brand_class: BrandClass,
    pub price: f64,
    pub quantity: u32,
    pub is_quantity_shared: bool,
    pub seller: Contact,
    #[serde(default)]
    pub market: MarketStats,
}

impl NetworkPart {
    pub fn new(
        part_number: impl Into<String>,
        part_name: impl Into<String>,
        brand: impl Into<String>,
        brand_class: BrandClass,
        price: f64,
        quantity: u32,
        seller: Contact,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            part_number: part_number.into(),
            part_name: part_name.into(),
            brand: brand.into(),
            brand_class,
            price,
            quantity,
            is_quantity_shared: true,
            seller,
            market: MarketStats::default(),
        }
    }

    pub fn with_market(mut self, market: MarketStats) -> Self {
        self.market = market;
        self
    }

    pub fn with_shared_quantity(mut self, shared: bool) -> Self {
        self.is_quantity_shared = shared;
        self
    }

    pub fn is_sold_by(&self, seller_name: &str) -> bool {
        self.seller.name == seller_name
    }

    /// Price times search impressions: what the listing is "worth" in exposure.
    pub fn exposure_value(&self) -> f64 {
        self.price * self.market.impressions.unwrap_or(0) as f64
    }
}
