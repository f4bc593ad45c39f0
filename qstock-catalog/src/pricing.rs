use serde::{Deserialize, Serialize};

use crate::listing::NetworkPart;

/// What the seller should do about a listing's price or stock
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Restock,
    Increase,
    /// Lower the price; presented to buyers as a saving
    Decrease,
    Good,
}

/// The advisor rule that produced a recommendation.
///
/// `LowStockUnderpriced` and `Underpriced` both yield `Increase` today but are
/// kept apart so they can carry different urgency later.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdvisorRule {
    OutOfStock,
    LowStockUnderpriced,
    Underpriced,
    Overpriced,
    WithinMarket,
}

impl AdvisorRule {
    pub fn recommendation(self) -> Recommendation {
        match self {
            AdvisorRule::OutOfStock => Recommendation::Restock,
            AdvisorRule::LowStockUnderpriced => Recommendation::Increase,
            AdvisorRule::Underpriced => Recommendation::Increase,
            AdvisorRule::Overpriced => Recommendation::Decrease,
            AdvisorRule::WithinMarket => Recommendation::Good,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Advice {
    pub recommendation: Recommendation,
    pub rule: AdvisorRule,
    /// Signed distance from the market average, in percent
    pub diff_percent: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingConfig {
    /// Stock below this counts as low
    pub low_stock_quantity: u32,

    /// Underpricing (percent, negative) that triggers an increase when stock is low
    pub low_stock_underpriced_percent: f64,

    /// Underpricing (percent, negative) that triggers an increase regardless of stock
    pub underpriced_percent: f64,

    /// Overpricing (percent, positive) that triggers a decrease
    pub overpriced_percent: f64,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            low_stock_quantity: 5,
            low_stock_underpriced_percent: -10.0,
            underpriced_percent: -15.0,
            overpriced_percent: 5.0,
        }
    }
}

/// Per-listing price recommendation against market statistics
#[derive(Debug, Clone, Default)]
pub struct PricingAdvisor {
    config: PricingConfig,
}

impl PricingAdvisor {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Rules are checked in order and the first match wins.
    pub fn advise(&self, part: &NetworkPart) -> Advice {
        let diff_percent = price_diff_percent(part.price, part.market.average_price);

        let rule = if part.quantity == 0 {
            AdvisorRule::OutOfStock
        } else if part.quantity < self.config.low_stock_quantity
            && diff_percent < self.config.low_stock_underpriced_percent
        {
            AdvisorRule::LowStockUnderpriced
        } else if diff_percent < self.config.underpriced_percent {
            AdvisorRule::Underpriced
        } else if diff_percent > self.config.overpriced_percent {
            AdvisorRule::Overpriced
        } else {
            AdvisorRule::WithinMarket
        };

        Advice {
            recommendation: rule.recommendation(),
            rule,
            diff_percent,
        }
    }

    pub fn recommend(&self, part: &NetworkPart) -> Recommendation {
        self.advise(part).recommendation
    }
}

/// `(price - average) / average * 100`. The listing's own price stands in for a
/// missing or zero average, which yields 0%.
pub fn price_diff_percent(price: f64, market_average: Option<f64>) -> f64 {
    let average = market_average.filter(|avg| *avg != 0.0).unwrap_or(price);
    if average > 0.0 {
        (price - average) * 100.0 / average
    } else {
        0.0
    }
}
