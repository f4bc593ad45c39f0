use serde::Serialize;
use tracing::debug;
use qstock_shared::models::sales::{Branch, RevenuePoint, SeriesPoint, TopSeller};
use qstock_store::seed;

use crate::error::AppError;
use crate::state::AppState;

/// Branch sales figures and chart series behind the home dashboard
#[derive(Debug, Clone, Default)]
pub struct SalesData {
    pub branches: Vec<Branch>,
    pub daily: Vec<SeriesPoint>,
    pub monthly: Vec<SeriesPoint>,
    pub revenue: Vec<RevenuePoint>,
    pub brand_share: Vec<SeriesPoint>,
    pub top_sellers: Vec<TopSeller>,
    pub inventory_value: f64,
}

impl SalesData {
    pub fn seeded() -> Self {
        Self {
            branches: seed::branches(),
            daily: seed::daily_sales(),
            monthly: seed::monthly_sales(),
            revenue: seed::revenue(),
            brand_share: seed::brand_share(),
            top_sellers: seed::top_sellers(),
            inventory_value: seed::INVENTORY_VALUE,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq)]
pub struct SalesTotals {
    pub daily: f64,
    pub monthly: f64,
    pub yearly: f64,
}

impl SalesTotals {
    fn of<'a>(branches: impl IntoIterator<Item = &'a Branch>) -> Self {
        branches.into_iter().fold(Self::default(), |acc, b| Self {
            daily: acc.daily + b.daily_sales,
            monthly: acc.monthly + b.monthly_sales,
            yearly: acc.yearly + b.yearly_sales,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub totals: SalesTotals,
    pub branches: Vec<Branch>,
    pub daily_sales: Vec<SeriesPoint>,
    pub monthly_sales: Vec<SeriesPoint>,
    pub revenue: Vec<RevenuePoint>,
    pub brand_share: Vec<SeriesPoint>,
    pub top_sellers: Vec<TopSeller>,
    pub inventory_value: f64,
}

/// Home dashboard, optionally narrowed to one branch
pub async fn dashboard_summary(
    state: &AppState,
    branch_id: Option<u32>,
) -> Result<DashboardSummary, AppError> {
    let sales = &state.sales;

    let branches: Vec<Branch> = match branch_id {
        None => sales.branches.clone(),
        Some(id) => {
            let branch = sales.branches.iter()
                .find(|b| b.id == id)
                .ok_or_else(|| AppError::NotFoundError(format!("Branch not found: {}", id)))?;
            vec![branch.clone()]
        }
    };
    debug!("Dashboard over {} branches", branches.len());

    Ok(DashboardSummary {
        totals: SalesTotals::of(&branches),
        branches,
        daily_sales: sales.daily.clone(),
        monthly_sales: sales.monthly.clone(),
        revenue: sales.revenue.clone(),
        brand_share: sales.brand_share.clone(),
        top_sellers: sales.top_sellers.clone(),
        inventory_value: sales.inventory_value,
    })
}
