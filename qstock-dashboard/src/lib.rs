pub mod state;
pub mod error;
pub mod dashboard;
pub mod marketplace;
pub mod products;
pub mod demand;
pub mod rfqs;
pub mod notifications;

pub use state::AppState;
pub use error::AppError;

/// Log filter used when `RUST_LOG` is unset; covers every workspace crate
pub const DEFAULT_LOG_FILTER: &str =
    "qstock=debug,qstock_dashboard=debug,qstock_rfq=debug,qstock_catalog=debug,qstock_store=debug";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_filter_covers_domain_crates() {
        for target in ["qstock_dashboard", "qstock_rfq", "qstock_catalog", "qstock_store"] {
            assert!(
                DEFAULT_LOG_FILTER.split(',').any(|d| d == format!("{}=debug", target)),
                "{} missing from default filter",
                target
            );
        }
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
