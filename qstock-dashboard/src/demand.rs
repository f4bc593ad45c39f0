use serde::Serialize;
use qstock_catalog::demand::{ProductRequest, SearchLog};

use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct DemandResponse {
    pub trending: Vec<SearchLog>,
    pub requests: Vec<ProductRequest>,
    pub brand_options: Vec<String>,
}

/// Trending searches and unmet requests, the latter filtered by brand
pub fn market_demand(state: &AppState, brand: Option<&str>) -> DemandResponse {
    DemandResponse {
        trending: state.demand.search_logs.clone(),
        requests: state.demand.requests_for_brand(brand),
        brand_options: state.demand.brand_options(),
    }
}
