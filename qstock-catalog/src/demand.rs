use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Brand-filter sentinel that matches every request
pub const ALL_BRANDS: &str = "All";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    Fulfilled,
}

/// A query buyers keep typing into the network search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchLog {
    pub id: Uuid,
    pub query: String,
    pub search_count: u64,
    pub last_searched: String,
    pub trend: Trend,
    pub results_found: bool,
}

/// A part buyers asked for that nobody in the network lists
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRequest {
    pub id: Uuid,
    pub part_number: String,
    pub brand: String,
    pub request_count: u64,
    pub last_requested: String,
    pub status: RequestStatus,
}

/// Market demand analytics: trending searches and unmet requests
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MarketDemand {
    pub search_logs: Vec<SearchLog>,
    pub requests: Vec<ProductRequest>,
}

impl MarketDemand {
    pub fn new(search_logs: Vec<SearchLog>, requests: Vec<ProductRequest>) -> Self {
        Self { search_logs, requests }
    }

    /// Requests for one brand; `None` or "All" returns everything
    pub fn requests_for_brand(&self, brand: Option<&str>) -> Vec<ProductRequest> {
        match brand.map(str::trim) {
            None | Some("") | Some(ALL_BRANDS) => self.requests.clone(),
            Some(brand) => self.requests.iter()
                .filter(|r| r.brand == brand)
                .cloned()
                .collect(),
        }
    }

    /// "All" followed by each requested brand in first-seen order
    pub fn brand_options(&self) -> Vec<String> {
        let mut brands = vec![ALL_BRANDS.to_string()];
        for request in &self.requests {
            if !brands.contains(&request.brand) {
                brands.push(request.brand.clone());
            }
        }
        brands
    }
}
