use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use qstock_catalog::{Advice, NetworkPart, SellerSummary};
use qstock_shared::models::events::ListingPriceChangedEvent;
use qstock_store::events::TOPIC_LISTING_REPRICED;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct ProductAdvice {
    pub listing: NetworkPart,
    pub advice: Advice,
}

#[derive(Debug, Clone, Serialize)]
pub struct MyProductsResponse {
    pub summary: SellerSummary,
    pub products: Vec<ProductAdvice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePriceRequest {
    pub listing_id: Uuid,
    pub new_price: f64,
}

/// The current user's listings, each with pricing advice
pub async fn my_products(state: &AppState) -> Result<MyProductsResponse, AppError> {
    let listings = state.listing_repo.list_by_seller(&state.current_user.name).await?;
    let summary = SellerSummary::compute(&listings, &state.advisor);

    let products = listings.into_iter()
        .map(|listing| ProductAdvice {
            advice: state.advisor.advise(&listing),
            listing,
        })
        .collect();

    Ok(MyProductsResponse { summary, products })
}

pub async fn update_price(
    state: &AppState,
    req: UpdatePriceRequest,
) -> Result<ProductAdvice, AppError> {
    let old_price = state.listing_repo.update_price(req.listing_id, req.new_price).await?;
    let listing = state.listing_repo.get_listing(req.listing_id).await?
        .ok_or_else(|| AppError::NotFoundError(format!("Listing not found: {}", req.listing_id)))?;

    let event = ListingPriceChangedEvent {
        listing_id: listing.id,
        old_price,
        new_price: listing.price,
        timestamp: Utc::now().timestamp(),
    };
    let _ = state.events.publish(TOPIC_LISTING_REPRICED, &listing.id.to_string(), &event).await;

    info!("Listing {} repriced {} -> {}", listing.id, old_price, listing.price);

    Ok(ProductAdvice {
        advice: state.advisor.advise(&listing),
        listing,
    })
}
