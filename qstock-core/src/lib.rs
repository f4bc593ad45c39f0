pub mod repository;
pub mod notify;

use qstock_catalog::CatalogError;
use qstock_rfq::RfqError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Notification failed: {0}")]
    NotificationError(String),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

impl From<RfqError> for CoreError {
    fn from(err: RfqError) -> Self {
        match &err {
            RfqError::Validation(msg) => CoreError::ValidationError(msg.clone()),
            RfqError::InvalidTransition { .. } => CoreError::InvalidStateTransition(err.to_string()),
            RfqError::RfqNotFound(_) | RfqError::QuoteNotFound(_) | RfqError::ItemNotFound(_) => {
                CoreError::NotFound(err.to_string())
            }
        }
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match &err {
            CatalogError::NotFound(_) => CoreError::NotFound(err.to_string()),
            CatalogError::InvalidPrice(_) => CoreError::ValidationError(err.to_string()),
            CatalogError::NetworkInactive => CoreError::InvalidStateTransition(err.to_string()),
        }
    }
}
