use serde::Deserialize;
use std::env;
use qstock_catalog::{NetworkSettings, PricingConfig, DEFAULT_MIN_QUERY_CHARS};
use qstock_shared::Contact;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub session: SessionConfig,
    pub marketplace: MarketplaceConfig,
    pub pricing: PricingConfig,
    pub notifications: NotificationConfig,
    pub network: NetworkSettings,
}

/// The signed-in branch; its name decides which listings are "mine"
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub user_name: String,
    pub user_city: String,
    pub user_phone: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_name: "Branch 3 - Tabuk".to_string(),
            user_city: "Tabuk".to_string(),
            user_phone: "0591234567".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn current_user(&self) -> Contact {
        Contact::new(self.user_name.as_str(), self.user_city.as_str(), self.user_phone.as_str())
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct MarketplaceConfig {
    pub min_query_chars: usize,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            min_query_chars: DEFAULT_MIN_QUERY_CHARS,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NotificationConfig {
    pub invite_delay_ms: u64,
    pub alert_delay_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            invite_delay_ms: 1500,
            alert_delay_ms: 1000,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Every key has a default, so even the base file is optional
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `QSTOCK_MARKETPLACE__MIN_QUERY_CHARS=3`
            .add_source(config::Environment::with_prefix("QSTOCK").prefix_separator("_").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
