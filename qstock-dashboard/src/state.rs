use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use qstock_catalog::{MarketDemand, NetworkReport, NetworkSettings, PricingAdvisor};
use qstock_core::notify::Notifier;
use qstock_core::repository::{ListingRepository, RfqRepository};
use qstock_rfq::RfqDraft;
use qstock_shared::Contact;
use qstock_store::app_config::{Config, MarketplaceConfig};
use qstock_store::{seed, EventJournal, InMemoryListingRepository, InMemoryRfqRepository, SimulatedNotifier};

use crate::dashboard::SalesData;

/// Everything a session's actions operate on, passed by handle to every service call
#[derive(Clone)]
pub struct AppState {
    pub current_user: Contact,
    pub rfq_repo: Arc<dyn RfqRepository>,
    pub listing_repo: Arc<dyn ListingRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub events: Arc<EventJournal>,
    pub settings: Arc<RwLock<NetworkSettings>>,
    pub rfq_draft: Arc<Mutex<RfqDraft>>,
    pub advisor: PricingAdvisor,
    pub marketplace: MarketplaceConfig,
    pub demand: Arc<MarketDemand>,
    pub report: Arc<NetworkReport>,
    pub sales: Arc<SalesData>,
}

impl AppState {
    /// Fresh session from the fixed seed data
    pub fn seeded(config: &Config) -> Self {
        let current_user = config.session.current_user();

        Self {
            rfq_repo: Arc::new(InMemoryRfqRepository::new()),
            listing_repo: Arc::new(InMemoryListingRepository::new(seed::network_parts(&current_user))),
            notifier: Arc::new(SimulatedNotifier::new(&config.notifications)),
            events: Arc::new(EventJournal::new()),
            settings: Arc::new(RwLock::new(config.network.clone())),
            rfq_draft: Arc::new(Mutex::new(RfqDraft::new(current_user.clone()))),
            advisor: PricingAdvisor::new(config.pricing.clone()),
            marketplace: config.marketplace.clone(),
            demand: Arc::new(seed::market_demand()),
            report: Arc::new(seed::network_report()),
            sales: Arc::new(SalesData::seeded()),
            current_user,
        }
    }
}
