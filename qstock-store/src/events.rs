use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{info, error};

pub const TOPIC_RFQ_CREATED: &str = "rfq.created";
pub const TOPIC_QUOTE_SUBMITTED: &str = "rfq.quote_submitted";
pub const TOPIC_QUOTE_CONFIRMED: &str = "rfq.quote_confirmed";
pub const TOPIC_LISTING_REPRICED: &str = "listing.repriced";

#[derive(Debug, Clone)]
pub struct JournalEntry {
    pub topic: String,
    pub key: String,
    pub payload: String,
}

/// Append-only record of domain events for the session
#[derive(Debug, Default)]
pub struct EventJournal {
    entries: Mutex<Vec<JournalEntry>>,
}

impl EventJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn publish<T: Serialize>(&self, topic: &str, key: &str, event: &T) -> Result<(), serde_json::Error> {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to encode event for {}: {}", topic, e);
                return Err(e);
            }
        };

        let mut entries = self.entries.lock().await;
        entries.push(JournalEntry {
            topic: topic.to_string(),
            key: key.to_string(),
            payload,
        });
        info!("Recorded event {}/{} at offset {}", topic, key, entries.len() - 1);

        Ok(())
    }

    pub async fn entries(&self, topic: &str) -> Vec<JournalEntry> {
        let entries = self.entries.lock().await;
        entries.iter().filter(|e| e.topic == topic).cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }
}
