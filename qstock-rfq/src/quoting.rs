use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use qstock_catalog::BrandClass;
use qstock_shared::Contact;

use crate::ledger::RfqError;
use crate::models::{Quote, QuoteItem, Rfq, DEFAULT_BRAND};

/// A seller's price entry for one requested line. A missing or zero price means
/// "not available".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ItemQuote {
    pub price: Option<f64>,
    /// Defaults to the requested quantity
    pub available_quantity: Option<u32>,
    pub note: Option<String>,
}

/// A substitute part offered in place of a requested line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AlternativeOffer {
    pub rfq_item_id: Option<Uuid>,
    pub part_number: String,
    pub brand: String,
    pub brand_class: BrandClass,
    pub price: f64,
    pub quantity: u32,
    pub note: Option<String>,
}

impl AlternativeOffer {
    pub fn new(rfq_item_id: Uuid, part_number: impl Into<String>, price: f64) -> Self {
        Self {
            rfq_item_id: Some(rfq_item_id),
            part_number: part_number.into(),
            brand: DEFAULT_BRAND.to_string(),
            brand_class: BrandClass::Commercial,
            price,
            quantity: 1,
            note: None,
        }
    }

    pub fn brand(mut self, brand: impl Into<String>, brand_class: BrandClass) -> Self {
        self.brand = brand.into();
        self.brand_class = brand_class;
        self
    }

    pub fn quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }
}

/// Everything a seller fills in on the quote form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSubmission {
    pub seller: Contact,
    #[serde(default)]
    pub prices: HashMap<Uuid, ItemQuote>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeOffer>,
}

impl QuoteSubmission {
    pub fn new(seller: Contact) -> Self {
        Self {
            seller,
            prices: HashMap::new(),
            alternatives: Vec::new(),
        }
    }

    /// Price a requested line at its requested quantity
    pub fn price(mut self, rfq_item_id: Uuid, price: f64) -> Self {
        self.prices.entry(rfq_item_id).or_default().price = Some(price);
        self
    }

    pub fn available(mut self, rfq_item_id: Uuid, quantity: u32) -> Self {
        self.prices.entry(rfq_item_id).or_default().available_quantity = Some(quantity);
        self
    }

    pub fn note(mut self, rfq_item_id: Uuid, note: impl Into<String>) -> Self {
        self.prices.entry(rfq_item_id).or_default().note = Some(note.into());
        self
    }

    pub fn alternative(mut self, offer: AlternativeOffer) -> Self {
        self.alternatives.push(offer);
        self
    }

    /// Turn the form into a quote for `rfq`. Priced lines come first in the
    /// RFQ's line order, followed by alternatives in the order they were added.
    pub fn build(self, rfq: &Rfq) -> Result<Quote, RfqError> {
        if let Some(field) = self.seller.missing_required_field() {
            return Err(RfqError::Validation(format!("seller {} is required", field)));
        }

        if let Some(unknown) = self.prices.keys().find(|id| rfq.item(id).is_none()) {
            return Err(RfqError::ItemNotFound(unknown.to_string()));
        }

        let mut items = Vec::new();

        for requested in &rfq.items {
            let Some(entry) = self.prices.get(&requested.id) else {
                continue;
            };
            let Some(price) = entry.price else {
                continue;
            };
            if !price.is_finite() || price < 0.0 {
                return Err(RfqError::Validation(format!(
                    "invalid price {} for '{}'",
                    price, requested.part_name
                )));
            }
            let quantity = entry.available_quantity.unwrap_or(requested.quantity);
            if price == 0.0 || quantity == 0 {
                continue;
            }

            items.push(QuoteItem {
                rfq_item_id: Some(requested.id),
                price,
                quantity,
                is_alternative: false,
                brand: None,
                part_number: None,
                brand_class: None,
                note: entry.note.clone().filter(|n| !n.trim().is_empty()),
            });
        }

        for offer in self.alternatives {
            if let Some(item_id) = offer.rfq_item_id {
                if rfq.item(&item_id).is_none() {
                    return Err(RfqError::ItemNotFound(item_id.to_string()));
                }
            }
            if offer.part_number.trim().is_empty() {
                return Err(RfqError::Validation("alternative part number is required".to_string()));
            }
            if !offer.price.is_finite() || offer.price <= 0.0 {
                return Err(RfqError::Validation(format!(
                    "alternative '{}' needs a positive price",
                    offer.part_number.trim()
                )));
            }
            if offer.quantity == 0 {
                return Err(RfqError::Validation(format!(
                    "alternative '{}' needs a positive quantity",
                    offer.part_number.trim()
                )));
            }

            items.push(QuoteItem {
                rfq_item_id: offer.rfq_item_id,
                price: offer.price,
                quantity: offer.quantity,
                is_alternative: true,
                brand: Some(offer.brand),
                part_number: Some(offer.part_number.trim().to_string()),
                brand_class: Some(offer.brand_class),
                note: offer.note.filter(|n| !n.trim().is_empty()),
            });
        }

        if items.is_empty() {
            return Err(RfqError::Validation("quote has no priced items".to_string()));
        }

        Ok(Quote::new(self.seller, items))
    }
}
