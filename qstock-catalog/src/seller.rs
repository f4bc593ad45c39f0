use serde::{Deserialize, Serialize};

use crate::listing::NetworkPart;
use crate::pricing::{price_diff_percent, PricingAdvisor, Recommendation};

/// Aggregates shown at the top of the seller's "my products" tab
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SellerSummary {
    pub product_count: usize,
    pub total_impressions: u64,
    pub exposure_value: f64,
    pub local_searches: u64,
    pub national_searches: u64,
    /// Mean price distance from market over products that have a market average
    pub average_competitiveness: f64,
    pub increase_count: usize,
    pub decrease_count: usize,
    pub restock_count: usize,
}

impl SellerSummary {
    pub fn compute(products: &[NetworkPart], advisor: &PricingAdvisor) -> Self {
        let mut summary = SellerSummary {
            product_count: products.len(),
            ..Default::default()
        };

        let mut diffs = Vec::new();
        for product in products {
            summary.total_impressions += product.market.impressions.unwrap_or(0);
            summary.exposure_value += product.exposure_value();
            summary.local_searches += product.market.local_search_count.unwrap_or(0);
            summary.national_searches += product.market.national_search_count.unwrap_or(0);

            if let Some(average) = product.market.average_price.filter(|avg| *avg != 0.0) {
                diffs.push(price_diff_percent(product.price, Some(average)));
            }

            match advisor.recommend(product) {
                Recommendation::Increase => summary.increase_count += 1,
                Recommendation::Decrease => summary.decrease_count += 1,
                Recommendation::Restock => summary.restock_count += 1,
                Recommendation::Good => {}
            }
        }

        if !diffs.is_empty() {
            summary.average_competitiveness = diffs.iter().sum::<f64>() / diffs.len() as f64;
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::{BrandClass, MarketStats};
    use qstock_shared::Contact;

    fn mine(price: f64, quantity: u32, market: MarketStats) -> NetworkPart {
        let me = Contact::new("Branch 3", "Tabuk", "0591234567");
        NetworkPart::new("X", "Part", "Toyota", BrandClass::Original, price, quantity, me).with_market(market)
    }

    #[test]
    fn test_summary_totals() {
        let products = vec![
            mine(120.0, 50, MarketStats {
                average_price: Some(100.0),
                impressions: Some(450),
                local_search_count: Some(300),
                national_search_count: Some(150),
                ..Default::default()
            }),
            mine(80.0, 0, MarketStats {
                average_price: Some(100.0),
                impressions: Some(50),
                local_search_count: Some(10),
                ..Default::default()
            }),
            mine(40.0, 9, MarketStats::default()),
        ];

        let summary = SellerSummary::compute(&products, &PricingAdvisor::default());
        assert_eq!(summary.product_count, 3);
        assert_eq!(summary.total_impressions, 500);
        assert_eq!(summary.exposure_value, 120.0 * 450.0 + 80.0 * 50.0);
        assert_eq!(summary.local_searches, 310);
        assert_eq!(summary.national_searches, 150);
        // (+20 + -20) / 2, the product without a market average is skipped
        assert_eq!(summary.average_competitiveness, 0.0);
        assert_eq!(summary.decrease_count, 1);
        assert_eq!(summary.restock_count, 1);
        assert_eq!(summary.increase_count, 0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = SellerSummary::compute(&[], &PricingAdvisor::default());
        assert_eq!(summary, SellerSummary::default());
    }
}
