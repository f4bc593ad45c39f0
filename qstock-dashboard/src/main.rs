use anyhow::Context;
use serde::Serialize;
use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use qstock_catalog::{BrandClass, NetworkSettings};
use qstock_dashboard::marketplace::{self, SearchRequest};
use qstock_dashboard::notifications::{self, AlertRequest, InviteRequest};
use qstock_dashboard::products::{self, UpdatePriceRequest};
use qstock_dashboard::rfqs::{self, SubmitQuoteRequest};
use qstock_dashboard::{dashboard, demand, AppError, AppState, DEFAULT_LOG_FILTER};
use qstock_rfq::{AlternativeOffer, ItemQuote, NewRfqItem};
use qstock_shared::Contact;
use qstock_store::app_config::Config;

fn emit<T: Serialize>(step: &str, data: &T) -> anyhow::Result<()> {
    let line = json!({ "step": step, "data": data });
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}

fn emit_error(step: &str, err: &AppError) -> anyhow::Result<()> {
    emit(step, &err.to_body())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Qstock session for {}", config.session.user_name);

    let state = AppState::seeded(&config);

    // Marketplace is closed until the user joins the network
    let search = SearchRequest {
        query: "brake".to_string(),
        ..Default::default()
    };
    if let Err(err) = marketplace::search_parts(&state, search).await {
        emit_error("search_inactive", &err)?;
    }

    let settings = marketplace::save_settings(&state, NetworkSettings {
        is_active: true,
        ..marketplace::get_settings(&state).await
    }).await;
    emit("settings", &settings)?;

    let results = marketplace::search_parts(&state, SearchRequest {
        query: "123-456".to_string(),
        brand_class: Some(BrandClass::Original),
        ..Default::default()
    }).await?;
    emit("search", &results)?;

    if let Some(first) = results.results.first() {
        emit("contact", &marketplace::reveal_contact(&state, first.id).await?)?;
    }

    // RFQ round trip: the current user asks, another seller quotes, the user confirms
    rfqs::add_draft_item(&state, NewRfqItem::new("Front bumper").part_number("52119-0K924")).await?;
    rfqs::add_draft_item(&state, NewRfqItem::new("Headlight").brand("Toyota", BrandClass::Commercial).quantity(2)).await?;
    let rfq = rfqs::submit_draft(&state).await?;
    emit("rfq_created", &rfq)?;

    let details = rfqs::rfq_details(&state, rfq.id).await?;
    let bumper = details.rfq.items[0].id;
    let headlight = details.rfq.items[1].id;

    let seller = Contact::new("Fast Spare Parts Est.", "Riyadh", "0501234567");
    let mut prices = std::collections::HashMap::new();
    prices.insert(bumper, ItemQuote {
        price: Some(650.0),
        available_quantity: None,
        note: None,
    });
    let quote = rfqs::submit_quote_as(&state, seller, rfq.id, SubmitQuoteRequest {
        prices,
        alternatives: vec![AlternativeOffer::new(headlight, "81150-0K710", 180.0).quantity(2)],
    }).await?;
    emit("quote_submitted", &quote)?;

    let closed = rfqs::confirm_quote(&state, rfq.id, quote.quote_id).await?;
    emit("quote_confirmed", &closed.summary)?;

    if let Err(err) = rfqs::confirm_quote(&state, rfq.id, quote.quote_id).await {
        emit_error("confirm_closed", &err)?;
    }

    let mine = products::my_products(&state).await?;
    emit("my_products", &mine)?;
    if let Some(product) = mine.products.first() {
        let repriced = products::update_price(&state, UpdatePriceRequest {
            listing_id: product.listing.id,
            new_price: 112.5,
        }).await?;
        emit("repriced", &repriced)?;
    }

    emit("network_report", &marketplace::network_report(&state).await?)?;
    emit("demand", &demand::market_demand(&state, Some("Toyota")))?;
    emit("dashboard", &dashboard::dashboard_summary(&state, None).await?)?;

    let invite = notifications::invite_supplier(&state, InviteRequest {
        phone: "0551112233".to_string(),
        supplier_name: Some("Al Noor Company".to_string()),
    }).await?;
    emit("invite", &invite)?;

    let alert = notifications::request_availability_alert(&state, AlertRequest {
        phone: config.session.user_phone.clone(),
        part_number: "90915-YZZE1".to_string(),
        brand: "Toyota".to_string(),
    }).await?;
    emit("alert", &alert)?;

    tracing::info!("Session finished with {} journal events", state.events.len().await);
    Ok(())
}
