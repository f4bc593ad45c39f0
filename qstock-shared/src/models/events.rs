use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct RfqCreatedEvent {
    pub rfq_id: Uuid,
    pub requester_name: String,
    pub item_count: usize,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct QuoteSubmittedEvent {
    pub rfq_id: Uuid,
    pub quote_id: Uuid,
    pub seller_name: String,
    pub total_price: f64,
    pub alternative_count: usize,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct QuoteConfirmedEvent {
    pub rfq_id: Uuid,
    pub quote_id: Uuid,
    pub seller_name: String,
    pub total_price: f64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct ListingPriceChangedEvent {
    pub listing_id: Uuid,
    pub old_price: f64,
    pub new_price: f64,
    pub timestamp: i64,
}
