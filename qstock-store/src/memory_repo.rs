use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;
use qstock_catalog::{ListingBook, NetworkPart, SearchFilter};
use qstock_core::repository::{ListingRepository, RfqRepository};
use qstock_core::CoreResult;
use qstock_rfq::{NewRfqItem, Quote, QuoteSubmission, Rfq, RfqLedger};
use qstock_shared::Contact;

/// Session-lifetime RFQ storage backed by an [`RfqLedger`]
#[derive(Debug, Default)]
pub struct InMemoryRfqRepository {
    ledger: RwLock<RfqLedger>,
}

impl InMemoryRfqRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RfqRepository for InMemoryRfqRepository {
    async fn create_rfq(&self, requester: Contact, items: Vec<NewRfqItem>) -> CoreResult<Rfq> {
        let mut ledger = self.ledger.write().await;
        Ok(ledger.create_rfq(requester, items)?)
    }

    async fn get_rfq(&self, id: Uuid) -> CoreResult<Option<Rfq>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.get(&id).cloned())
    }

    async fn list_rfqs(&self) -> CoreResult<Vec<Rfq>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.all().to_vec())
    }

    async fn list_requested_by(&self, requester_name: &str) -> CoreResult<Vec<Rfq>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.requested_by(requester_name))
    }

    async fn list_incoming(&self, seller_name: &str) -> CoreResult<Vec<Rfq>> {
        let ledger = self.ledger.read().await;
        Ok(ledger.incoming_for(seller_name))
    }

    async fn submit_quote(&self, rfq_id: Uuid, submission: QuoteSubmission) -> CoreResult<Quote> {
        let mut ledger = self.ledger.write().await;
        Ok(ledger.submit_quote(&rfq_id, submission)?)
    }

    async fn confirm_quote(&self, rfq_id: Uuid, quote_id: Uuid) -> CoreResult<Rfq> {
        let mut ledger = self.ledger.write().await;
        let rfq = ledger.confirm_quote(&rfq_id, &quote_id)?;
        Ok(rfq.clone())
    }
}

/// Session-lifetime listing storage backed by a [`ListingBook`]
#[derive(Debug, Default)]
pub struct InMemoryListingRepository {
    book: RwLock<ListingBook>,
}

impl InMemoryListingRepository {
    pub fn new(listings: Vec<NetworkPart>) -> Self {
        Self {
            book: RwLock::new(ListingBook::from_listings(listings)),
        }
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn search(&self, filter: &SearchFilter, min_query_chars: usize) -> CoreResult<Vec<NetworkPart>> {
        let book = self.book.read().await;
        Ok(book.search(filter, min_query_chars))
    }

    async fn get_listing(&self, id: Uuid) -> CoreResult<Option<NetworkPart>> {
        let book = self.book.read().await;
        Ok(book.get(&id).cloned())
    }

    async fn list_cities(&self) -> CoreResult<Vec<String>> {
        let book = self.book.read().await;
        Ok(book.cities())
    }

    async fn list_by_seller(&self, seller_name: &str) -> CoreResult<Vec<NetworkPart>> {
        let book = self.book.read().await;
        Ok(book.sold_by(seller_name))
    }

    async fn update_price(&self, id: Uuid, new_price: f64) -> CoreResult<f64> {
        let mut book = self.book.write().await;
        Ok(book.update_price(&id, new_price)?)
    }

    async fn reveal_contact(&self, id: Uuid) -> CoreResult<Contact> {
        let mut book = self.book.write().await;
        let listing = book.reveal_contact(&id)?;
        Ok(listing.seller.clone())
    }
}
