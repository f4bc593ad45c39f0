use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use qstock_shared::PhoneNumber;

use crate::{CoreError, CoreResult};

/// SMS invitation asking a supplier to join the network
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierInvite {
    pub phone: PhoneNumber,
    pub supplier_name: Option<String>,
}

impl SupplierInvite {
    pub fn new(phone: impl Into<PhoneNumber>, supplier_name: Option<String>) -> Self {
        Self {
            phone: phone.into(),
            supplier_name: supplier_name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.phone.is_blank() {
            return Err(CoreError::ValidationError("supplier phone is required".to_string()));
        }
        Ok(())
    }

    pub fn acknowledgement(&self) -> String {
        format!(
            "Network invitation sent to {} ({})",
            self.supplier_name.as_deref().unwrap_or("the supplier"),
            self.phone.reveal()
        )
    }
}

/// "Tell me when available" request for a part nobody lists yet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityAlert {
    pub phone: PhoneNumber,
    pub part_number: String,
    pub brand: String,
}

impl AvailabilityAlert {
    pub fn new(phone: impl Into<PhoneNumber>, part_number: impl Into<String>, brand: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            part_number: part_number.into().trim().to_string(),
            brand: brand.into(),
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.part_number.is_empty() {
            return Err(CoreError::ValidationError("part number is required".to_string()));
        }
        if self.phone.is_blank() {
            return Err(CoreError::ValidationError("contact phone is required".to_string()));
        }
        Ok(())
    }

    pub fn acknowledgement(&self) -> String {
        format!(
            "Request received. You will be notified when part {} - {} is available",
            self.part_number, self.brand
        )
    }
}

/// Local acknowledgement of an outbound notification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationReceipt {
    pub id: Uuid,
    pub destination: PhoneNumber,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

impl NotificationReceipt {
    pub fn new(destination: PhoneNumber, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            destination,
            message,
            sent_at: Utc::now(),
        }
    }
}

/// Outbound notification transport
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_invite(
        &self,
        invite: &SupplierInvite,
    ) -> CoreResult<NotificationReceipt>;

    async fn request_availability_alert(
        &self,
        alert: &AvailabilityAlert,
    ) -> CoreResult<NotificationReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invite_validation_and_message() {
        assert!(SupplierInvite::new("", Some("Al Noor".to_string())).validate().is_err());

        let invite = SupplierInvite::new("0559876543", Some("  ".to_string()));
        assert!(invite.validate().is_ok());
        assert_eq!(invite.acknowledgement(), "Network invitation sent to the supplier (0559876543)");
    }

    #[test]
    fn test_alert_validation() {
        assert!(AvailabilityAlert::new("0591234567", " ", "Toyota").validate().is_err());
        assert!(AvailabilityAlert::new("", "87910-06390", "Toyota").validate().is_err());

        let alert = AvailabilityAlert::new("0591234567", "87910-06390", "Toyota");
        assert!(alert.validate().is_ok());
        assert!(alert.acknowledgement().contains("87910-06390 - Toyota"));
    }
}
