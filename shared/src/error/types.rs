//! Error type for the quoting core

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// Every failure the quoting core can report is one of these values; none of
/// them is fatal to the host. Hosts display `message`, branch on `code`, and
/// may surface `details` (offending field, value) next to the input.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

/// Result alias used throughout the quoting core
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Whether this error is a caller-side validation failure
    pub fn is_validation(&self) -> bool {
        self.code.is_validation()
    }

    // ==================== Convenience constructors ====================

    /// Create a generic validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// `ValidationError("negative price")`
    pub fn negative_price(value: f64) -> Self {
        Self::new(ErrorCode::NegativePrice).with_detail("value", value)
    }

    /// `ValidationError("reason required for discount")`
    pub fn discount_reason_required() -> Self {
        Self::new(ErrorCode::DiscountReasonRequired)
    }

    /// `ValidationError("target must be positive")`
    pub fn non_positive_target(target: f64) -> Self {
        Self::new(ErrorCode::NonPositiveTarget).with_detail("target", target)
    }

    /// Reject a NaN or infinite numeric input
    pub fn invalid_amount(field: &str, value: f64) -> Self {
        Self::with_message(
            ErrorCode::InvalidAmount,
            format!("{field} must be a finite number, got {value}"),
        )
        .with_detail("field", field)
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ConfigError, msg)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_message(ErrorCode::InvalidFormat, err.to_string())
    }
}
