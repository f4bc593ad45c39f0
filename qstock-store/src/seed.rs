//! Fixed data every session starts from.

use uuid::Uuid;
use qstock_catalog::demand::{MarketDemand, ProductRequest, RequestStatus, SearchLog, Trend};
use qstock_catalog::report::{DailyStat, NetworkReport, ReportProduct};
use qstock_catalog::{BrandClass, MarketStats, NetworkPart};
use qstock_shared::models::sales::{Branch, RevenuePoint, SeriesPoint, TopSeller};
use qstock_shared::Contact;

/// Inventory value across all branches
pub const INVENTORY_VALUE: f64 = 140_946_235.33;

/// Network listings. Two of them belong to `current_user`.
pub fn network_parts(current_user: &Contact) -> Vec<NetworkPart> {
    let fast_parts = Contact::new("Fast Spare Parts Est.", "Riyadh", "0501234567");
    let al_noor = Contact::new("Al Noor Company", "Jeddah", "0559876543");
    let service_center = Contact::new("Authorized Service Center", "Riyadh", "0114445555");

    vec![
        NetworkPart::new("123-456-TY", "Front brake pads", "Toyota", BrandClass::Original, 250.0, 15, fast_parts)
            .with_market(MarketStats {
                good_price_votes: Some(45),
                bad_price_votes: Some(2),
                impressions: Some(1250),
                average_price: Some(240.0),
                lowest_price: Some(225.0),
                local_search_count: Some(800),
                national_search_count: Some(450),
                last_purchase_price: Some(230.0),
            }),
        NetworkPart::new("999-888-NS", "Oil filter", "Nissan", BrandClass::Original, 35.0, 100, al_noor)
            .with_shared_quantity(false)
            .with_market(MarketStats {
                good_price_votes: Some(120),
                bad_price_votes: Some(0),
                impressions: Some(3400),
                average_price: Some(38.0),
                lowest_price: Some(32.0),
                local_search_count: Some(2000),
                national_search_count: Some(1400),
                last_purchase_price: Some(40.0),
            }),
        NetworkPart::new("BRK-Pad-001", "Brake kit", "Toyota", BrandClass::Commercial, 120.0, 50, current_user.clone())
            .with_market(MarketStats {
                good_price_votes: Some(15),
                bad_price_votes: Some(5),
                impressions: Some(450),
                average_price: Some(130.0),
                lowest_price: Some(115.0),
                local_search_count: Some(300),
                national_search_count: Some(150),
                last_purchase_price: Some(115.0),
            }),
        NetworkPart::new("ALT-HY-2024", "Alternator", "Hyundai", BrandClass::Oem, 800.0, 3, service_center)
            .with_market(MarketStats {
                good_price_votes: Some(8),
                bad_price_votes: Some(12),
                impressions: Some(220),
                average_price: Some(750.0),
                lowest_price: Some(740.0),
                local_search_count: Some(150),
                national_search_count: Some(70),
                last_purchase_price: Some(850.0),
            }),
        NetworkPart::new("123-456-TY", "Front brake pads", "Toyota", BrandClass::Original, 245.0, 20, current_user.clone())
            .with_market(MarketStats {
                good_price_votes: Some(30),
                bad_price_votes: Some(1),
                impressions: Some(890),
                average_price: Some(250.0),
                lowest_price: Some(235.0),
                local_search_count: Some(600),
                national_search_count: Some(290),
                last_purchase_price: Some(230.0),
            }),
    ]
}

pub fn market_demand() -> MarketDemand {
    let log = |query: &str, count: u64, last: &str, trend: Trend| SearchLog {
        id: Uuid::new_v4(),
        query: query.to_string(),
        search_count: count,
        last_searched: last.to_string(),
        trend,
        results_found: true,
    };
    let request = |part_number: &str, brand: &str, count: u64, last: &str| ProductRequest {
        id: Uuid::new_v4(),
        part_number: part_number.to_string(),
        brand: brand.to_string(),
        request_count: count,
        last_requested: last.to_string(),
        status: RequestStatus::Pending,
    };

    MarketDemand::new(
        vec![
            log("Camry 2023 front bumper", 1450, "5 minutes ago", Trend::Up),
            log("Elantra gearbox", 890, "15 minutes ago", Trend::Up),
            log("Hilux shock absorbers", 650, "1 hour ago", Trend::Stable),
            log("LED headlights 2024", 420, "2 hours ago", Trend::Down),
            log("GMC fuel pump", 310, "3 hours ago", Trend::Stable),
        ],
        vec![
            request("87910-06390", "Toyota", 45, "today"),
            request("96301-3TA0A", "Nissan", 32, "yesterday"),
            request("92101-C8000", "Hyundai", 28, "yesterday"),
            request("G5021-12345", "Ford", 15, "2 days ago"),
            request("12300-RNN12", "Nissan", 12, "3 days ago"),
            request("52119-0X925", "Toyota", 8, "a week ago"),
        ],
    )
}

pub fn network_report() -> NetworkReport {
    let day = |day: &str, impressions: u64, views: u64| DailyStat {
        day: day.to_string(),
        impressions,
        views,
    };
    let product = |name: &str, part_number: &str, impressions: u64, views: u64, last: &str| ReportProduct {
        id: Uuid::new_v4(),
        name: name.to_string(),
        part_number: part_number.to_string(),
        impressions,
        views,
        last_viewed: last.to_string(),
    };

    NetworkReport {
        total_impressions: 12450,
        total_views: 842,
        active_products: 450,
        daily_stats: vec![
            day("Saturday", 1200, 80),
            day("Sunday", 1500, 120),
            day("Monday", 1800, 150),
            day("Tuesday", 1600, 110),
            day("Wednesday", 2000, 180),
            day("Thursday", 2200, 160),
            day("Friday", 2150, 42),
        ],
        top_products: vec![
            product("Camry 2020 alternator", "TOY-Alt-2020", 540, 45, "10 minutes ago"),
            product("Nissan AC compressor", "NIS-AC-Comp", 320, 28, "1 hour ago"),
            product("Rear shock absorbers", "HYU-Shocks", 210, 15, "2 hours ago"),
            product("Spark plugs", "NGK-Spark", 150, 12, "5 hours ago"),
        ],
    }
}

pub fn branches() -> Vec<Branch> {
    let branch = |id: u32, name: &str, city: &str, daily: f64, monthly: f64, yearly: f64| Branch {
        id,
        name: name.to_string(),
        city: city.to_string(),
        daily_sales: daily,
        monthly_sales: monthly,
        yearly_sales: yearly,
    };

    vec![
        branch(1, "ff", "Riyadh", 0.0, 0.0, 0.0),
        branch(2, "Branch 3", "Tabuk", 0.0, 0.0, 0.0),
        branch(3, "Branch 2", "El Mahalla El Kubra", 0.0, 0.0, 0.0),
        branch(4, "Main", "Cairo", 0.0, 23749.85, 23749.85),
    ]
}

pub fn daily_sales() -> Vec<SeriesPoint> {
    ["05", "06", "07", "08", "09", "10", "11"]
        .iter()
        .map(|day| SeriesPoint::new(*day, 0.0))
        .collect()
}

pub fn monthly_sales() -> Vec<SeriesPoint> {
    ["FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC", "JAN"]
        .iter()
        .map(|month| SeriesPoint::new(*month, 0.0))
        .collect()
}

pub fn revenue() -> Vec<RevenuePoint> {
    [
        ("January", 45000.0, 12000.0),
        ("February", 52000.0, 15000.0),
        ("March", 48000.0, 13000.0),
        ("April", 61000.0, 18000.0),
        ("May", 55000.0, 16000.0),
        ("June", 67000.0, 21000.0),
    ]
    .iter()
    .map(|(label, revenue, profit)| RevenuePoint {
        label: label.to_string(),
        revenue: *revenue,
        profit: *profit,
    })
    .collect()
}

/// Sales share per vehicle brand, in percent
pub fn brand_share() -> Vec<SeriesPoint> {
    vec![
        SeriesPoint::new("Toyota", 45.0),
        SeriesPoint::new("Nissan", 25.0),
        SeriesPoint::new("Hyundai", 20.0),
        SeriesPoint::new("Other", 10.0),
    ]
}

pub fn top_sellers() -> Vec<TopSeller> {
    let seller = |name: &str, units: u64, revenue: f64, growth: f64| TopSeller {
        name: name.to_string(),
        units_sold: units,
        revenue,
        growth_percent: growth,
    };

    vec![
        seller("Toyota Camry brake pads", 120, 18000.0, 12.0),
        seller("Nissan oil filter", 350, 8750.0, 5.0),
        seller("Hyundai spark plugs", 200, 12000.0, -2.0),
        seller("Corolla front bumper", 15, 6000.0, 8.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_user_owns_two_listings() {
        let me = Contact::new("Branch 3 - Tabuk", "Tabuk", "0591234567");
        let parts = network_parts(&me);
        assert_eq!(parts.len(), 5);
        assert_eq!(parts.iter().filter(|p| p.is_sold_by(&me.name)).count(), 2);
    }

    #[test]
    fn test_brand_share_sums_to_hundred() {
        let total: f64 = brand_share().iter().map(|p| p.value).sum();
        assert_eq!(total, 100.0);
    }
}
