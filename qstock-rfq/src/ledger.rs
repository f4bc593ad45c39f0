use qstock_shared::Contact;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::{NewRfqItem, Quote, Rfq, RfqStatus};
use crate::quoting::QuoteSubmission;

/// Holds every RFQ of the session and owns their state transitions
#[derive(Debug, Default)]
pub struct RfqLedger {
    rfqs: Vec<Rfq>,
}

impl RfqLedger {
    pub fn new() -> Self {
        Self { rfqs: Vec::new() }
    }

    /// Create a new RFQ from the buyer's lines. Nothing is stored unless every
    /// line and the requester contact are valid.
    pub fn create_rfq(&mut self, requester: Contact, items: Vec<NewRfqItem>) -> Result<Rfq, RfqError> {
        if items.is_empty() {
            return Err(RfqError::Validation("at least one item is required".to_string()));
        }
        if let Some(field) = requester.missing_required_field() {
            return Err(RfqError::Validation(format!("requester {} is required", field)));
        }
        if let Some(reason) = items.iter().find_map(NewRfqItem::invalid_reason) {
            return Err(RfqError::Validation(reason));
        }

        let items = items.into_iter().map(NewRfqItem::into_item).collect();
        let rfq = Rfq::new(requester, items);
        info!("RFQ {} created by {} with {} items", rfq.id, rfq.requester.name, rfq.items.len());

        self.rfqs.push(rfq.clone());
        Ok(rfq)
    }

    pub fn get(&self, rfq_id: &Uuid) -> Option<&Rfq> {
        self.rfqs.iter().find(|r| r.id == *rfq_id)
    }

    /// All RFQs, oldest first
    pub fn all(&self) -> &[Rfq] {
        &self.rfqs
    }

    /// RFQs the named buyer sent out
    pub fn requested_by(&self, requester_name: &str) -> Vec<Rfq> {
        self.rfqs.iter()
            .filter(|r| r.requester.name == requester_name)
            .cloned()
            .collect()
    }

    /// Requests from other buyers that the named seller can still quote on
    pub fn incoming_for(&self, seller_name: &str) -> Vec<Rfq> {
        self.rfqs.iter()
            .filter(|r| r.requester.name != seller_name && r.status.accepts_quotes())
            .cloned()
            .collect()
    }

    /// Append a seller's quote. Existing quotes are never touched.
    /// Transition: Open → Pending on the first quote.
    pub fn submit_quote(&mut self, rfq_id: &Uuid, submission: QuoteSubmission) -> Result<Quote, RfqError> {
        let rfq = self.get_rfq_mut(rfq_id)?;

        if !rfq.status.accepts_quotes() {
            warn!("Quote rejected: RFQ {} is {:?}", rfq_id, rfq.status);
            return Err(RfqError::InvalidTransition {
                from: rfq.status,
                action: "submit quote",
            });
        }

        if submission.seller.name.trim() == rfq.requester.name {
            warn!("Quote rejected: {} cannot quote on their own RFQ {}", rfq.requester.name, rfq_id);
            return Err(RfqError::Validation("cannot quote on your own RFQ".to_string()));
        }

        let quote = submission.build(rfq)?;
        rfq.quotes.push(quote.clone());
        if rfq.status == RfqStatus::Open {
            rfq.status = RfqStatus::Pending;
        }

        info!(
            "Quote {} from {} on RFQ {}: {} items, total {:.2}",
            quote.id, quote.seller.name, rfq_id, quote.items.len(), quote.total_price
        );
        Ok(quote)
    }

    /// Transition: Open/Pending → Closed. Marks exactly one quote confirmed.
    pub fn confirm_quote(&mut self, rfq_id: &Uuid, quote_id: &Uuid) -> Result<&Rfq, RfqError> {
        let rfq = self.get_rfq_mut(rfq_id)?;

        if rfq.status == RfqStatus::Closed {
            warn!("Confirmation rejected: RFQ {} already closed", rfq_id);
            return Err(RfqError::InvalidTransition {
                from: rfq.status,
                action: "confirm quote",
            });
        }

        if rfq.quote(quote_id).is_none() {
            return Err(RfqError::QuoteNotFound(quote_id.to_string()));
        }

        for quote in rfq.quotes.iter_mut() {
            quote.is_confirmed = quote.id == *quote_id;
        }
        rfq.status = RfqStatus::Closed;
        info!("RFQ {} closed with quote {}", rfq_id, quote_id);

        Ok(&*rfq)
    }

    fn get_rfq_mut(&mut self, rfq_id: &Uuid) -> Result<&mut Rfq, RfqError> {
        self.rfqs.iter_mut()
            .find(|r| r.id == *rfq_id)
            .ok_or_else(|| RfqError::RfqNotFound(rfq_id.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RfqError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Cannot {action} on an RFQ that is {from:?}")]
    InvalidTransition {
        from: RfqStatus,
        action: &'static str,
    },

    #[error("RFQ not found: {0}")]
    RfqNotFound(String),

    #[error("Quote not found: {0}")]
    QuoteNotFound(String),

    #[error("RFQ item not found: {0}")]
    ItemNotFound(String),
}
