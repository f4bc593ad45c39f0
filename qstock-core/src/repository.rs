use async_trait::async_trait;
use uuid::Uuid;
use qstock_catalog::{NetworkPart, SearchFilter};
use qstock_rfq::{NewRfqItem, Quote, QuoteSubmission, Rfq};
use qstock_shared::Contact;

use crate::CoreResult;

/// Repository trait for RFQ data access
#[async_trait]
pub trait RfqRepository: Send + Sync {
    async fn create_rfq(
        &self,
        requester: Contact,
        items: Vec<NewRfqItem>,
    ) -> CoreResult<Rfq>;

    async fn get_rfq(
        &self,
        id: Uuid,
    ) -> CoreResult<Option<Rfq>>;

    async fn list_rfqs(&self) -> CoreResult<Vec<Rfq>>;

    /// RFQs the buyer sent
    async fn list_requested_by(
        &self,
        requester_name: &str,
    ) -> CoreResult<Vec<Rfq>>;

    /// RFQs from other buyers still accepting quotes
    async fn list_incoming(
        &self,
        seller_name: &str,
    ) -> CoreResult<Vec<Rfq>>;

    async fn submit_quote(
        &self,
        rfq_id: Uuid,
        submission: QuoteSubmission,
    ) -> CoreResult<Quote>;

    async fn confirm_quote(
        &self,
        rfq_id: Uuid,
        quote_id: Uuid,
    ) -> CoreResult<Rfq>;
}

/// Repository trait for marketplace listing access
#[async_trait]
pub trait ListingRepository: Send + Sync {
    async fn search(
        &self,
        filter: &SearchFilter,
        min_query_chars: usize,
    ) -> CoreResult<Vec<NetworkPart>>;

    async fn get_listing(
        &self,
        id: Uuid,
    ) -> CoreResult<Option<NetworkPart>>;

    async fn list_cities(&self) -> CoreResult<Vec<String>>;

    async fn list_by_seller(
        &self,
        seller_name: &str,
    ) -> CoreResult<Vec<NetworkPart>>;

    /// Returns the previous price
    async fn update_price(
        &self,
        id: Uuid,
        new_price: f64,
    ) -> CoreResult<f64>;

    async fn reveal_contact(
        &self,
        id: Uuid,
    ) -> CoreResult<Contact>;
}
