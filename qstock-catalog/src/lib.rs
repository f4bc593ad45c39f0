pub mod listing;
pub mod book;
pub mod search;
pub mod pricing;
pub mod seller;
pub mod demand;
pub mod report;
pub mod settings;

pub use listing::{BrandClass, MarketStats, NetworkPart};
pub use book::{CatalogError, ListingBook};
pub use search::{SearchFilter, DEFAULT_MIN_QUERY_CHARS};
pub use pricing::{Advice, AdvisorRule, PricingAdvisor, PricingConfig, Recommendation};
pub use seller::SellerSummary;
pub use demand::{MarketDemand, ProductRequest, RequestStatus, SearchLog, Trend};
pub use report::NetworkReport;
pub use settings::{NetworkSettings, PriceList};
