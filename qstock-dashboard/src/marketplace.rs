use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;
use qstock_catalog::{BrandClass, CatalogError, NetworkPart, NetworkReport, NetworkSettings, SearchFilter};
use qstock_core::CoreError;
use qstock_shared::Contact;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub brand: Option<String>,
    pub brand_class: Option<BrandClass>,
    pub city: Option<String>,
}

impl From<SearchRequest> for SearchFilter {
    fn from(req: SearchRequest) -> Self {
        SearchFilter {
            query: req.query,
            brand: req.brand,
            brand_class: req.brand_class,
            city: req.city,
        }
    }
}

/// A listing as another buyer sees it; the seller's phone stays hidden
#[derive(Debug, Clone, Serialize)]
pub struct ListingResponse {
    pub id: Uuid,
    pub part_number: String,
    pub part_name: String,
    pub brand: String,
    pub brand_class: BrandClass,
    pub price: f64,
    /// `None` when the seller does not share stock levels
    pub quantity: Option<u32>,
    pub seller_name: String,
    pub seller_city: String,
    pub lowest_price: Option<f64>,
    pub last_purchase_price: Option<f64>,
}

impl From<NetworkPart> for ListingResponse {
    fn from(part: NetworkPart) -> Self {
        Self {
            id: part.id,
            quantity: part.is_quantity_shared.then_some(part.quantity),
            part_number: part.part_number,
            part_name: part.part_name,
            brand: part.brand,
            brand_class: part.brand_class,
            price: part.price,
            seller_name: part.seller.name,
            seller_city: part.seller.city,
            lowest_price: part.market.lowest_price,
            last_purchase_price: part.market.last_purchase_price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<ListingResponse>,
    pub cities: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactResponse {
    pub listing_id: Uuid,
    pub name: String,
    pub city: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkReportResponse {
    #[serde(flatten)]
    pub report: NetworkReport,
    pub view_rate_percent: f64,
}

// ============================================================================
// Handlers
// ============================================================================

async fn ensure_network_active(state: &AppState) -> Result<(), AppError> {
    if state.settings.read().await.is_active {
        Ok(())
    } else {
        warn!("Marketplace used while the network is inactive");
        Err(CoreError::from(CatalogError::NetworkInactive).into())
    }
}

/// Marketplace search across every seller's listings
pub async fn search_parts(
    state: &AppState,
    req: SearchRequest,
) -> Result<SearchResponse, AppError> {
    ensure_network_active(state).await?;

    let filter = SearchFilter::from(req);
    let results = state.listing_repo
        .search(&filter, state.marketplace.min_query_chars)
        .await?;
    let cities = state.listing_repo.list_cities().await?;

    info!("Marketplace search '{}' returned {} listings", filter.query, results.len());

    Ok(SearchResponse {
        results: results.into_iter().map(ListingResponse::from).collect(),
        cities,
    })
}

pub async fn available_cities(state: &AppState) -> Result<Vec<String>, AppError> {
    ensure_network_active(state).await?;
    Ok(state.listing_repo.list_cities().await?)
}

/// "Contact seller": shows the seller's full phone number
pub async fn reveal_contact(
    state: &AppState,
    listing_id: Uuid,
) -> Result<ContactResponse, AppError> {
    ensure_network_active(state).await?;

    let Contact { name, city, phone } = state.listing_repo.reveal_contact(listing_id).await?;
    info!("Contact revealed for listing {}", listing_id);

    Ok(ContactResponse {
        listing_id,
        name,
        city,
        phone: phone.into_inner(),
    })
}

pub async fn get_settings(state: &AppState) -> NetworkSettings {
    state.settings.read().await.clone()
}

/// Replaces the network settings wholesale
pub async fn save_settings(state: &AppState, settings: NetworkSettings) -> NetworkSettings {
    let mut current = state.settings.write().await;
    *current = settings;
    info!(
        "Network settings saved: active={}, price_list={:?}, share_quantity={}",
        current.is_active, current.price_list, current.share_quantity
    );
    current.clone()
}

/// Weekly network report with the live count of the user's listings
pub async fn network_report(state: &AppState) -> Result<NetworkReportResponse, AppError> {
    let mine = state.listing_repo.list_by_seller(&state.current_user.name).await?;
    let report = state.report.as_ref().clone().with_active_products(mine.len());

    Ok(NetworkReportResponse {
        view_rate_percent: report.view_rate_percent(),
        report,
    })
}
