use std::collections::HashMap;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;
use qstock_rfq::{AlternativeOffer, ItemQuote, NewRfqItem, Quote, QuoteSubmission, Rfq, RfqStatus};
use qstock_shared::models::events::{QuoteConfirmedEvent, QuoteSubmittedEvent, RfqCreatedEvent};
use qstock_shared::Contact;
use qstock_store::events::{TOPIC_QUOTE_CONFIRMED, TOPIC_QUOTE_SUBMITTED, TOPIC_RFQ_CREATED};

use crate::error::AppError;
use crate::state::AppState;

/// Label for a quote line that answers no requested item
const ALTERNATIVE_PART_LABEL: &str = "Alternative part";

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRfqRequest {
    /// Defaults to the current user
    pub requester: Option<Contact>,
    pub items: Vec<NewRfqItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitQuoteRequest {
    #[serde(default)]
    pub prices: HashMap<Uuid, ItemQuote>,
    #[serde(default)]
    pub alternatives: Vec<AlternativeOffer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RfqSummary {
    pub id: Uuid,
    pub requester_name: String,
    pub requester_city: String,
    pub status: RfqStatus,
    pub item_count: usize,
    pub quote_count: usize,
    pub created_at: chrono::DateTime<Utc>,
}

impl From<&Rfq> for RfqSummary {
    fn from(rfq: &Rfq) -> Self {
        Self {
            id: rfq.id,
            requester_name: rfq.requester.name.clone(),
            requester_city: rfq.requester.city.clone(),
            status: rfq.status,
            item_count: rfq.items.len(),
            quote_count: rfq.quotes.len(),
            created_at: rfq.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteLineView {
    pub part_name: String,
    pub part_number: Option<String>,
    pub brand: Option<String>,
    pub price: f64,
    pub quantity: u32,
    pub line_total: f64,
    pub is_alternative: bool,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteView {
    pub quote_id: Uuid,
    pub seller_name: String,
    pub seller_city: String,
    pub total_price: f64,
    pub alternative_count: usize,
    pub is_confirmed: bool,
    pub lines: Vec<QuoteLineView>,
}

/// One RFQ with its quotes, cheapest first
#[derive(Debug, Clone, Serialize)]
pub struct RfqDetails {
    pub summary: RfqSummary,
    pub rfq: Rfq,
    pub quotes: Vec<QuoteView>,
}

impl RfqDetails {
    fn from_rfq(rfq: Rfq) -> Self {
        let quotes = rfq.quotes_by_price()
            .into_iter()
            .map(|quote| quote_view(&rfq, quote))
            .collect();
        Self {
            summary: RfqSummary::from(&rfq),
            rfq,
            quotes,
        }
    }
}

fn quote_view(rfq: &Rfq, quote: &Quote) -> QuoteView {
    let lines = quote.items.iter()
        .map(|line| {
            let requested = line.rfq_item_id.as_ref().and_then(|id| rfq.item(id));
            QuoteLineView {
                part_name: requested
                    .map(|item| item.part_name.clone())
                    .unwrap_or_else(|| ALTERNATIVE_PART_LABEL.to_string()),
                part_number: line.part_number.clone()
                    .or_else(|| requested.and_then(|item| item.part_number.clone())),
                brand: line.brand.clone()
                    .or_else(|| requested.map(|item| item.brand.clone())),
                price: line.price,
                quantity: line.quantity,
                line_total: line.line_total(),
                is_alternative: line.is_alternative,
                note: line.note.clone(),
            }
        })
        .collect();

    QuoteView {
        quote_id: quote.id,
        seller_name: quote.seller.name.clone(),
        seller_city: quote.seller.city.clone(),
        total_price: quote.total_price,
        alternative_count: quote.alternative_count(),
        is_confirmed: quote.is_confirmed,
        lines,
    }
}

// ============================================================================
// Handlers
// ============================================================================

async fn publish_created(state: &AppState, rfq: &Rfq) {
    let event = RfqCreatedEvent {
        rfq_id: rfq.id,
        requester_name: rfq.requester.name.clone(),
        item_count: rfq.items.len(),
        timestamp: Utc::now().timestamp(),
    };
    let _ = state.events.publish(TOPIC_RFQ_CREATED, &rfq.id.to_string(), &event).await;
}

/// Send an RFQ in one step
pub async fn create_rfq(
    state: &AppState,
    req: CreateRfqRequest,
) -> Result<RfqSummary, AppError> {
    let requester = req.requester.unwrap_or_else(|| state.current_user.clone());
    let rfq = state.rfq_repo.create_rfq(requester, req.items).await?;
    publish_created(state, &rfq).await;
    Ok(RfqSummary::from(&rfq))
}

/// Add a line to the session's RFQ form, returning the number of lines
pub async fn add_draft_item(state: &AppState, item: NewRfqItem) -> Result<usize, AppError> {
    let mut draft = state.rfq_draft.lock().await;
    draft.add_item(item).map_err(qstock_core::CoreError::from)?;
    Ok(draft.items().len())
}

pub async fn remove_draft_item(state: &AppState, index: usize) -> Result<NewRfqItem, AppError> {
    state.rfq_draft.lock().await
        .remove_item(index)
        .ok_or_else(|| AppError::NotFoundError(format!("No RFQ line at position {}", index + 1)))
}

pub async fn set_draft_requester(state: &AppState, requester: Contact) {
    state.rfq_draft.lock().await.set_requester(requester);
}

/// Send the session's RFQ form. The form keeps its lines when sending fails.
pub async fn submit_draft(state: &AppState) -> Result<RfqSummary, AppError> {
    let mut draft = state.rfq_draft.lock().await;
    let rfq = state.rfq_repo
        .create_rfq(draft.requester().clone(), draft.items().to_vec())
        .await?;
    draft.clear();
    drop(draft);

    publish_created(state, &rfq).await;
    Ok(RfqSummary::from(&rfq))
}

/// RFQs the current user sent
pub async fn my_rfqs(state: &AppState) -> Result<Vec<RfqSummary>, AppError> {
    let rfqs = state.rfq_repo.list_requested_by(&state.current_user.name).await?;
    Ok(rfqs.iter().map(RfqSummary::from).collect())
}

/// RFQs from other buyers the current user can still quote on
pub async fn incoming_rfqs(state: &AppState) -> Result<Vec<RfqSummary>, AppError> {
    let rfqs = state.rfq_repo.list_incoming(&state.current_user.name).await?;
    debug!("{} incoming RFQs for {}", rfqs.len(), state.current_user.name);
    Ok(rfqs.iter().map(RfqSummary::from).collect())
}

pub async fn rfq_details(state: &AppState, rfq_id: Uuid) -> Result<RfqDetails, AppError> {
    let rfq = state.rfq_repo.get_rfq(rfq_id).await?
        .ok_or_else(|| AppError::NotFoundError(format!("RFQ not found: {}", rfq_id)))?;
    Ok(RfqDetails::from_rfq(rfq))
}

/// Quote on an RFQ as the current user
pub async fn submit_quote(
    state: &AppState,
    rfq_id: Uuid,
    req: SubmitQuoteRequest,
) -> Result<QuoteView, AppError> {
    submit_quote_as(state, state.current_user.clone(), rfq_id, req).await
}

pub async fn submit_quote_as(
    state: &AppState,
    seller: Contact,
    rfq_id: Uuid,
    req: SubmitQuoteRequest,
) -> Result<QuoteView, AppError> {
    let submission = QuoteSubmission {
        seller,
        prices: req.prices,
        alternatives: req.alternatives,
    };
    let quote = state.rfq_repo.submit_quote(rfq_id, submission).await?;

    let event = QuoteSubmittedEvent {
        rfq_id,
        quote_id: quote.id,
        seller_name: quote.seller.name.clone(),
        total_price: quote.total_price,
        alternative_count: quote.alternative_count(),
        timestamp: Utc::now().timestamp(),
    };
    let _ = state.events.publish(TOPIC_QUOTE_SUBMITTED, &rfq_id.to_string(), &event).await;

    let rfq = state.rfq_repo.get_rfq(rfq_id).await?
        .ok_or_else(|| AppError::NotFoundError(format!("RFQ not found: {}", rfq_id)))?;
    info!("Quote {} from {} on RFQ {}", quote.id, quote.seller.name, rfq_id);

    Ok(quote_view(&rfq, &quote))
}

/// Accept one quote; the RFQ closes
pub async fn confirm_quote(
    state: &AppState,
    rfq_id: Uuid,
    quote_id: Uuid,
) -> Result<RfqDetails, AppError> {
    let rfq = state.rfq_repo.confirm_quote(rfq_id, quote_id).await?;

    if let Some(quote) = rfq.confirmed_quote() {
        let event = QuoteConfirmedEvent {
            rfq_id,
            quote_id: quote.id,
            seller_name: quote.seller.name.clone(),
            total_price: quote.total_price,
            timestamp: Utc::now().timestamp(),
        };
        let _ = state.events.publish(TOPIC_QUOTE_CONFIRMED, &rfq_id.to_string(), &event).await;
    }

    Ok(RfqDetails::from_rfq(rfq))
}
