use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStat {
    pub day: String,
    pub impressions: u64,
    pub views: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportProduct {
    pub id: Uuid,
    pub name: String,
    pub part_number: String,
    /// Appearances in search results
    pub impressions: u64,
    /// Detail views
    pub views: u64,
    pub last_viewed: String,
}

/// Seller performance in the network over the last week
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NetworkReport {
    pub total_impressions: u64,
    pub total_views: u64,
    pub active_products: usize,
    pub daily_stats: Vec<DailyStat>,
    pub top_products: Vec<ReportProduct>,
}

impl NetworkReport {
    /// Views per 100 impressions, 0 when nothing was shown
    pub fn view_rate_percent(&self) -> f64 {
        if self.total_impressions == 0 {
            0.0
        } else {
            self.total_views as f64 * 100.0 / self.total_impressions as f64
        }
    }

    pub fn with_active_products(mut self, active_products: usize) -> Self {
        self.active_products = active_products;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_rate() {
        let report = NetworkReport {
            total_impressions: 1000,
            total_views: 50,
            ..Default::default()
        };
        assert!((report.view_rate_percent() - 5.0).abs() < 1e-9);
        assert_eq!(NetworkReport::default().view_rate_percent(), 0.0);
    }
}
