use serde::{Deserialize, Serialize};

/// Sales figures of one branch
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Branch {
    pub id: u32,
    pub name: String,
    pub city: String,
    pub daily_sales: f64,
    pub monthly_sales: f64,
    pub yearly_sales: f64,
}

/// One `{label, value}` record for a single-series chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevenuePoint {
    pub label: String,
    pub revenue: f64,
    pub profit: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopSeller {
    pub name: String,
    pub units_sold: u64,
    pub revenue: f64,
    /// Period-over-period growth in percent
    pub growth_percent: f64,
}
