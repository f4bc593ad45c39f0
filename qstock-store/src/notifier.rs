use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;
use qstock_core::notify::{AvailabilityAlert, NotificationReceipt, Notifier, SupplierInvite};
use qstock_core::CoreResult;

use crate::app_config::NotificationConfig;

/// Stands in for the SMS gateway: waits the configured delay, then acknowledges.
/// Never fails once the request is valid.
pub struct SimulatedNotifier {
    invite_delay: Duration,
    alert_delay: Duration,
}

impl SimulatedNotifier {
    pub fn new(config: &NotificationConfig) -> Self {
        Self {
            invite_delay: Duration::from_millis(config.invite_delay_ms),
            alert_delay: Duration::from_millis(config.alert_delay_ms),
        }
    }
}

#[async_trait]
impl Notifier for SimulatedNotifier {
    async fn send_invite(&self, invite: &SupplierInvite) -> CoreResult<NotificationReceipt> {
        invite.validate()?;
        sleep(self.invite_delay).await;

        info!("Simulated SMS invite to {}", invite.phone);
        Ok(NotificationReceipt::new(invite.phone.clone(), invite.acknowledgement()))
    }

    async fn request_availability_alert(&self, alert: &AvailabilityAlert) -> CoreResult<NotificationReceipt> {
        alert.validate()?;
        sleep(self.alert_delay).await;

        info!("Availability alert registered for {} ({})", alert.part_number, alert.brand);
        Ok(NotificationReceipt::new(alert.phone.clone(), alert.acknowledgement()))
    }
}
