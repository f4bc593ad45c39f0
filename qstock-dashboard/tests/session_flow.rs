use std::collections::HashMap;
use qstock_catalog::{BrandClass, NetworkSettings, Recommendation};
use qstock_dashboard::marketplace::{self, SearchRequest};
use qstock_dashboard::notifications::{self, AlertRequest, InviteRequest};
use qstock_dashboard::products::{self, UpdatePriceRequest};
use qstock_dashboard::rfqs::{self, CreateRfqRequest, SubmitQuoteRequest};
use qstock_dashboard::{dashboard, demand, AppError, AppState};
use qstock_rfq::{AlternativeOffer, ItemQuote, NewRfqItem, RfqStatus};
use qstock_shared::Contact;
use qstock_store::app_config::{Config, NotificationConfig};
use qstock_store::events::{TOPIC_LISTING_REPRICED, TOPIC_QUOTE_CONFIRMED, TOPIC_QUOTE_SUBMITTED, TOPIC_RFQ_CREATED};

fn test_config() -> Config {
    Config {
        notifications: NotificationConfig {
            invite_delay_ms: 0,
            alert_delay_ms: 0,
        },
        ..Default::default()
    }
}

async fn active_state() -> AppState {
    let state = AppState::seeded(&test_config());
    marketplace::save_settings(&state, NetworkSettings {
        is_active: true,
        ..Default::default()
    }).await;
    state
}

fn seller() -> Contact {
    Contact::new("Al Noor Company", "Jeddah", "0559876543")
}

fn priced(price: f64) -> ItemQuote {
    ItemQuote {
        price: Some(price),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_search_requires_active_network() {
    let state = AppState::seeded(&test_config());

    let err = marketplace::search_parts(&state, SearchRequest::default()).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidStateError(_)));

    marketplace::save_settings(&state, NetworkSettings {
        is_active: true,
        ..Default::default()
    }).await;
    let all = marketplace::search_parts(&state, SearchRequest::default()).await.unwrap();
    assert_eq!(all.results.len(), 5);
    assert_eq!(all.cities, vec!["Riyadh", "Jeddah", "Tabuk"]);
}

#[tokio::test]
async fn test_short_query_is_ignored() {
    let state = active_state().await;

    let short = marketplace::search_parts(&state, SearchRequest {
        query: "abc".to_string(),
        ..Default::default()
    }).await.unwrap();
    assert_eq!(short.results.len(), 5);

    let narrowed = marketplace::search_parts(&state, SearchRequest {
        query: "123-4".to_string(),
        ..Default::default()
    }).await.unwrap();
    assert_eq!(narrowed.results.len(), 2);
    assert!(narrowed.results.iter().all(|r| r.part_number.contains("123-4")));

    let riyadh_oem = marketplace::search_parts(&state, SearchRequest {
        city: Some("Riyadh".to_string()),
        brand_class: Some(BrandClass::Oem),
        ..Default::default()
    }).await.unwrap();
    assert_eq!(riyadh_oem.results.len(), 1);
    assert_eq!(riyadh_oem.results[0].part_number, "ALT-HY-2024");
}

#[tokio::test]
async fn test_hidden_quantity_and_contact_reveal() {
    let state = active_state().await;

    let oil = marketplace::search_parts(&state, SearchRequest {
        query: "Oil filter".to_string(),
        ..Default::default()
    }).await.unwrap();
    assert_eq!(oil.results.len(), 1);
    assert_eq!(oil.results[0].quantity, None);

    let contact = marketplace::reveal_contact(&state, oil.results[0].id).await.unwrap();
    assert_eq!(contact.name, "Al Noor Company");
    assert_eq!(contact.phone, "0559876543");

    let missing = marketplace::reveal_contact(&state, uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(missing, AppError::NotFoundError(_)));
}

#[tokio::test]
async fn test_partial_quote_then_confirm_closes_rfq() {
    let state = active_state().await;

    let created = rfqs::create_rfq(&state, CreateRfqRequest {
        requester: None,
        items: vec![
            NewRfqItem::new("Front bumper"),
            NewRfqItem::new("Headlight").quantity(2),
        ],
    }).await.unwrap();
    assert_eq!(created.status, RfqStatus::Open);
    assert_eq!(created.requester_name, "Branch 3 - Tabuk");

    let details = rfqs::rfq_details(&state, created.id).await.unwrap();
    let first = details.rfq.items[0].id;
    let second = details.rfq.items[1].id;

    let mut prices = HashMap::new();
    prices.insert(first, ItemQuote {
        price: Some(50.0),
        available_quantity: Some(2),
        note: None,
    });
    let quote_a = rfqs::submit_quote_as(&state, seller(), created.id, SubmitQuoteRequest {
        prices,
        alternatives: Vec::new(),
    }).await.unwrap();
    assert_eq!(quote_a.total_price, 100.0);
    assert_eq!(quote_a.lines.len(), 1);
    assert_eq!(quote_a.lines[0].part_name, "Front bumper");

    let mut prices = HashMap::new();
    prices.insert(first, priced(45.0));
    let quote_b = rfqs::submit_quote_as(
        &state,
        Contact::new("Fast Spare Parts Est.", "Riyadh", "0501234567"),
        created.id,
        SubmitQuoteRequest {
            prices,
            alternatives: vec![AlternativeOffer::new(second, "81150-0K710", 30.0).quantity(2)],
        },
    ).await.unwrap();
    assert_eq!(quote_b.alternative_count, 1);
    assert_eq!(quote_b.total_price, 45.0 + 60.0);

    let pending = rfqs::rfq_details(&state, created.id).await.unwrap();
    assert_eq!(pending.summary.status, RfqStatus::Pending);
    assert_eq!(pending.quotes[0].quote_id, quote_a.quote_id);

    let closed = rfqs::confirm_quote(&state, created.id, quote_a.quote_id).await.unwrap();
    assert_eq!(closed.summary.status, RfqStatus::Closed);
    assert_eq!(closed.quotes.iter().filter(|q| q.is_confirmed).count(), 1);
    assert!(closed.quotes.iter().any(|q| q.quote_id == quote_a.quote_id && q.is_confirmed));

    let err = rfqs::confirm_quote(&state, created.id, quote_b.quote_id).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidStateError(_)));

    let err = rfqs::submit_quote_as(&state, seller(), created.id, SubmitQuoteRequest {
        prices: HashMap::from([(first, priced(40.0))]),
        alternatives: Vec::new(),
    }).await.unwrap_err();
    assert!(matches!(err, AppError::InvalidStateError(_)));

    assert_eq!(state.events.entries(TOPIC_RFQ_CREATED).await.len(), 1);
    assert_eq!(state.events.entries(TOPIC_QUOTE_SUBMITTED).await.len(), 2);
    assert_eq!(state.events.entries(TOPIC_QUOTE_CONFIRMED).await.len(), 1);
}

#[tokio::test]
async fn test_current_user_cannot_quote_own_rfq() {
    let state = active_state().await;

    let created = rfqs::create_rfq(&state, CreateRfqRequest {
        requester: None,
        items: vec![NewRfqItem::new("Radiator")],
    }).await.unwrap();
    let details = rfqs::rfq_details(&state, created.id).await.unwrap();

    let err = rfqs::submit_quote(&state, created.id, SubmitQuoteRequest {
        prices: HashMap::from([(details.rfq.items[0].id, priced(300.0))]),
        alternatives: Vec::new(),
    }).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    let after = rfqs::rfq_details(&state, created.id).await.unwrap();
    assert_eq!(after.summary.status, RfqStatus::Open);
    assert!(after.quotes.is_empty());
    assert!(state.events.entries(TOPIC_QUOTE_SUBMITTED).await.is_empty());
}

#[tokio::test]
async fn test_empty_rfq_is_rejected() {
    let state = active_state().await;

    let err = rfqs::create_rfq(&state, CreateRfqRequest {
        requester: None,
        items: Vec::new(),
    }).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert!(rfqs::my_rfqs(&state).await.unwrap().is_empty());
    assert!(state.events.entries(TOPIC_RFQ_CREATED).await.is_empty());
}

#[tokio::test]
async fn test_draft_form_flow() {
    let state = active_state().await;

    let err = rfqs::submit_draft(&state).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));

    assert_eq!(rfqs::add_draft_item(&state, NewRfqItem::new("Grille")).await.unwrap(), 1);
    assert_eq!(rfqs::add_draft_item(&state, NewRfqItem::new("Mirror")).await.unwrap(), 2);
    assert!(rfqs::add_draft_item(&state, NewRfqItem::new("  ")).await.is_err());

    let removed = rfqs::remove_draft_item(&state, 0).await.unwrap();
    assert_eq!(removed.part_name, "Grille");
    assert!(matches!(
        rfqs::remove_draft_item(&state, 4).await,
        Err(AppError::NotFoundError(_))
    ));

    let sent = rfqs::submit_draft(&state).await.unwrap();
    assert_eq!(sent.item_count, 1);
    assert!(state.rfq_draft.lock().await.items().is_empty());

    assert_eq!(rfqs::my_rfqs(&state).await.unwrap().len(), 1);
    assert!(rfqs::incoming_rfqs(&state).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_draft_submit_keeps_lines() {
    let state = active_state().await;

    rfqs::set_draft_requester(&state, Contact::new("Branch 3 - Tabuk", "Tabuk", "")).await;
    rfqs::add_draft_item(&state, NewRfqItem::new("Grille")).await.unwrap();

    let err = rfqs::submit_draft(&state).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert_eq!(state.rfq_draft.lock().await.items().len(), 1);
    assert!(state.events.entries(TOPIC_RFQ_CREATED).await.is_empty());

    rfqs::set_draft_requester(&state, state.current_user.clone()).await;
    let sent = rfqs::submit_draft(&state).await.unwrap();
    assert_eq!(sent.item_count, 1);
    assert!(state.rfq_draft.lock().await.items().is_empty());
}

#[tokio::test]
async fn test_my_products_advice_and_reprice() {
    let state = active_state().await;

    let mine = products::my_products(&state).await.unwrap();
    assert_eq!(mine.summary.product_count, 2);
    assert_eq!(mine.products[0].listing.part_number, "BRK-Pad-001");
    // 120 against a 130 average is within the market band
    assert_eq!(mine.products[0].advice.recommendation, Recommendation::Good);

    let repriced = products::update_price(&state, UpdatePriceRequest {
        listing_id: mine.products[0].listing.id,
        new_price: 140.0,
    }).await.unwrap();
    assert_eq!(repriced.listing.price, 140.0);
    assert_eq!(repriced.advice.recommendation, Recommendation::Decrease);
    assert_eq!(state.events.entries(TOPIC_LISTING_REPRICED).await.len(), 1);

    let err = products::update_price(&state, UpdatePriceRequest {
        listing_id: mine.products[0].listing.id,
        new_price: 0.0,
    }).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn test_report_demand_and_dashboard() {
    let state = active_state().await;

    let report = marketplace::network_report(&state).await.unwrap();
    assert_eq!(report.report.active_products, 2);
    let expected_rate = report.report.total_views as f64 * 100.0 / report.report.total_impressions as f64;
    assert!(report.view_rate_percent > 0.0);
    assert!((report.view_rate_percent - expected_rate).abs() < 1e-9);

    let toyota = demand::market_demand(&state, Some("Toyota"));
    assert!(toyota.requests.iter().all(|r| r.brand == "Toyota"));
    assert_eq!(toyota.brand_options[0], "All");
    let everything = demand::market_demand(&state, Some("All"));
    assert_eq!(everything.requests.len(), state.demand.requests.len());

    let all = dashboard::dashboard_summary(&state, None).await.unwrap();
    assert_eq!(all.branches.len(), 4);
    assert!((all.totals.monthly - 23749.85).abs() < 1e-6);

    let main = dashboard::dashboard_summary(&state, Some(4)).await.unwrap();
    assert_eq!(main.branches.len(), 1);
    assert_eq!(main.branches[0].city, "Cairo");

    let err = dashboard::dashboard_summary(&state, Some(99)).await.unwrap_err();
    assert!(matches!(err, AppError::NotFoundError(_)));
}

#[tokio::test]
async fn test_notifications() {
    let state = active_state().await;

    let invite = notifications::invite_supplier(&state, InviteRequest {
        phone: "0551112233".to_string(),
        supplier_name: None,
    }).await.unwrap();
    assert!(invite.message.contains("the supplier"));

    let err = notifications::request_availability_alert(&state, AlertRequest {
        phone: "0591234567".to_string(),
        part_number: " ".to_string(),
        brand: "Toyota".to_string(),
    }).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}
