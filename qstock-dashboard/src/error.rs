use serde_json::json;
use qstock_core::CoreError;

/// Failure of a user action, surfaced to the user who triggered it
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Invalid state: {0}")]
    InvalidStateError(String),
    #[error("Not found: {0}")]
    NotFoundError(String),
    #[error("Notification failed: {0}")]
    NotificationError(String),
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation",
            AppError::InvalidStateError(_) => "invalid_state",
            AppError::NotFoundError(_) => "not_found",
            AppError::NotificationError(_) => "notification",
            AppError::InternalError(_) => "internal",
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            AppError::ValidationError(msg)
            | AppError::InvalidStateError(msg)
            | AppError::NotFoundError(msg)
            | AppError::NotificationError(msg) => msg.clone(),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                "Something went wrong, please try again".to_string()
            }
        }
    }

    pub fn to_body(&self) -> serde_json::Value {
        json!({
            "error": self.user_message(),
            "kind": self.kind(),
        })
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => AppError::ValidationError(msg),
            CoreError::InvalidStateTransition(msg) => AppError::InvalidStateError(msg),
            CoreError::NotFound(msg) => AppError::NotFoundError(msg),
            CoreError::NotificationError(msg) => AppError::NotificationError(msg),
            CoreError::InternalError(msg) => AppError::InternalError(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_keep_their_category() {
        let err: AppError = CoreError::NotFound("Quote not found: q-1".to_string()).into();
        assert_eq!(err.kind(), "not_found");
        assert_eq!(err.to_body()["error"], "Quote not found: q-1");
    }

    #[test]
    fn test_internal_details_are_not_shown() {
        let err: AppError = CoreError::InternalError("lock poisoned".to_string()).into();
        assert_eq!(err.kind(), "internal");
        assert!(!err.user_message().contains("poisoned"));
    }
}
