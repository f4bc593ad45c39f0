use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use qstock_catalog::BrandClass;
use qstock_shared::Contact;

/// Brand preselected on new request lines and alternative offers
pub const DEFAULT_BRAND: &str = "Toyota";

/// RFQ status in the negotiation lifecycle
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RfqStatus {
    /// Sent to sellers, no quote yet
    Open,
    /// At least one quote received, waiting for the buyer
    Pending,
    /// One quote confirmed. Terminal.
    Closed,
}

impl RfqStatus {
    pub fn accepts_quotes(self) -> bool {
        !matches!(self, RfqStatus::Closed)
    }
}

/// A requested part line on an RFQ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RfqItem {
    pub id: Uuid,
    pub part_name: String,
    pub part_number: Option<String>,
    pub brand: String,
    pub brand_class: BrandClass,
    pub quantity: u32,
}

/// Unvalidated request line, as typed into the RFQ form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewRfqItem {
    pub part_name: String,
    pub part_number: Option<String>,
    pub brand: String,
    pub brand_class: BrandClass,
    pub quantity: u32,
}

impl NewRfqItem {
    pub fn new(part_name: impl Into<String>) -> Self {
        Self {
            part_name: part_name.into(),
            part_number: None,
            brand: DEFAULT_BRAND.to_string(),
            brand_class: BrandClass::Original,
            quantity: 1,
        }
    }

    pub fn part_number(mut self, part_number: impl Into<String>) -> Self {
        self.part_number = Some(part_number.into());
        self
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

    /// Reason the line cannot be submitted, if any
    pub fn invalid_reason(&self) -> Option<String> {
        if self.part_name.trim().is_empty() {
            Some("part name is required".to_string())
        } else if self.quantity == 0 {
            Some(format!("quantity for '{}' must be positive", self.part_name.trim()))
        } else {
            None
        }
    }

    pub(crate) fn into_item(self) -> RfqItem {
        RfqItem {
            id: Uuid::new_v4(),
            part_name: self.part_name.trim().to_string(),
            part_number: self.part_number
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
            brand: self.brand,
            brand_class: self.brand_class,
            quantity: self.quantity,
        }
    }
}

/// One priced line of a seller's quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteItem {
    /// `None` for an offer that is not tied to a requested line
    pub rfq_item_id: Option<Uuid>,
    pub price: f64,
    pub quantity: u32,
    pub is_alternative: bool,
    pub brand: Option<String>,
    pub part_number: Option<String>,
    pub brand_class: Option<BrandClass>,
    pub note: Option<String>,
}

impl QuoteItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// A seller's priced answer to an RFQ
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub id: Uuid,
    pub seller: Contact,
    pub submitted_at: DateTime<Utc>,
    pub total_price: f64,
    pub items: Vec<QuoteItem>,
    pub is_confirmed: bool,
}

impl Quote {
    pub fn new(seller: Contact, items: Vec<QuoteItem>) -> Self {
        let total_price = items.iter().map(QuoteItem::line_total).sum();
        Self {
            id: Uuid::new_v4(),
            seller,
            submitted_at: Utc::now(),
            total_price,
            items,
            is_confirmed: false,
        }
    }

    pub fn alternative_count(&self) -> usize {
        self.items.iter().filter(|i| i.is_alternative).count()
    }
}

/// A buyer's request for quotes, owning its lines and the quotes received
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rfq {
    pub id: Uuid,
    pub requester: Contact,
    pub created_at: DateTime<Utc>,
    pub status: RfqStatus,
    pub items: Vec<RfqItem>,
    pub quotes: Vec<Quote>,
}

impl Rfq {
    pub(crate) fn new(requester: Contact, items: Vec<RfqItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            requester,
            created_at: Utc::now(),
            status: RfqStatus::Open,
            items,
            quotes: Vec::new(),
        }
    }

    pub fn item(&self, item_id: &Uuid) -> Option<&RfqItem> {
        self.items.iter().find(|i| i.id == *item_id)
    }

    pub fn quote(&self, quote_id: &Uuid) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.id == *quote_id)
    }

    pub fn confirmed_quote(&self) -> Option<&Quote> {
        self.quotes.iter().find(|q| q.is_confirmed)
    }

    /// Quotes ordered cheapest first; ties keep arrival order
    pub fn quotes_by_price(&self) -> Vec<&Quote> {
        let mut quotes: Vec<&Quote> = self.quotes.iter().collect();
        quotes.sort_by(|a, b| a.total_price.total_cmp(&b.total_price));
        quotes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seller() -> Contact {
        Contact::new("Al Noor", "Jeddah", "0559876543")
    }

    #[test]
    fn test_quote_total_is_sum_of_lines() {
        let items = vec![
            QuoteItem {
                rfq_item_id: Some(Uuid::new_v4()),
                price: 50.0,
                quantity: 2,
                is_alternative: false,
                brand: None,
                part_number: None,
                brand_class: None,
                note: None,
            },
            QuoteItem {
                rfq_item_id: None,
                price: 12.5,
                quantity: 4,
                is_alternative: true,
                brand: Some("Denso".to_string()),
                part_number: Some("DN-1".to_string()),
                brand_class: Some(BrandClass::Commercial),
                note: None,
            },
        ];
        let quote = Quote::new(seller(), items);
        assert_eq!(quote.total_price, 150.0);
        assert_eq!(quote.alternative_count(), 1);
        assert!(!quote.is_confirmed);
    }

    #[test]
    fn test_new_item_defaults_and_validation() {
        let item = NewRfqItem::new("Front bumper");
        assert_eq!(item.brand, DEFAULT_BRAND);
        assert_eq!(item.brand_class, BrandClass::Original);
        assert_eq!(item.quantity, 1);
        assert!(item.invalid_reason().is_none());

        assert!(NewRfqItem::new("   ").invalid_reason().is_some());
        assert!(NewRfqItem::new("Bumper").quantity(0).invalid_reason().is_some());
    }

    #[test]
    fn test_blank_part_number_is_dropped() {
        let item = NewRfqItem::new(" Oil filter ").part_number("  ").into_item();
        assert_eq!(item.part_name, "Oil filter");
        assert_eq!(item.part_number, None);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&RfqStatus::Pending).unwrap(), "\"pending\"");
        assert!(RfqStatus::Open.accepts_quotes());
        assert!(!RfqStatus::Closed.accepts_quotes());
    }
}
