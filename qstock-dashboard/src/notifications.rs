use serde::Deserialize;
use tracing::info;
use qstock_core::notify::{AvailabilityAlert, NotificationReceipt, SupplierInvite};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Deserialize)]
pub struct InviteRequest {
    pub phone: String,
    pub supplier_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertRequest {
    pub phone: String,
    pub part_number: String,
    pub brand: String,
}

pub async fn invite_supplier(
    state: &AppState,
    req: InviteRequest,
) -> Result<NotificationReceipt, AppError> {
    let invite = SupplierInvite::new(req.phone.as_str(), req.supplier_name);
    let receipt = state.notifier.send_invite(&invite).await?;
    info!("Supplier invite {} delivered", receipt.id);
    Ok(receipt)
}

/// "Tell me when available" for a part nobody lists yet
pub async fn request_availability_alert(
    state: &AppState,
    req: AlertRequest,
) -> Result<NotificationReceipt, AppError> {
    let alert = AvailabilityAlert::new(req.phone.as_str(), req.part_number, req.brand);
    let receipt = state.notifier.request_availability_alert(&alert).await?;
    info!("Availability alert {} registered", receipt.id);
    Ok(receipt)
}
