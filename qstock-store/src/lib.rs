pub mod app_config;
pub mod memory_repo;
pub mod notifier;
pub mod events;
pub mod seed;

pub use memory_repo::{InMemoryListingRepository, InMemoryRfqRepository};
pub use notifier::SimulatedNotifier;
pub use events::EventJournal;
