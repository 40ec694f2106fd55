//! Unified error codes for the quoting core
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Pricing errors (selection, bundle, override)
//! - 2xxx: Financing errors (options, terms, rates)
//! - 3xxx: Recommendation errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so hosts in any language
/// can match on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Numeric input is NaN or infinite
    InvalidAmount = 9,

    // ==================== 1xxx: Pricing ====================
    /// Override or delta would produce a negative price
    NegativePrice = 1001,
    /// A markdown below the original price has no reason
    DiscountReasonRequired = 1002,
    /// Operation needs a non-empty selection
    SelectionEmpty = 1003,
    /// Equipment item not part of the current selection
    ItemNotSelected = 1004,

    // ==================== 2xxx: Financing ====================
    /// Term is not offered by the financing option
    TermNotOffered = 2001,
    /// Interest rate is negative or not finite
    InvalidRate = 2002,
    /// Operation needs a financing option to be chosen first
    NoFinancingSelected = 2003,

    // ==================== 3xxx: Recommendation ====================
    /// Target monthly payment is zero or negative
    NonPositiveTarget = 3001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Configuration error
    ConfigError = 9005,
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl ErrorCode {
    /// Numeric value of this code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Whether this code represents success
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Default message for this code
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::InvalidAmount => "Amount must be a finite number",

            ErrorCode::NegativePrice => "negative price",
            ErrorCode::DiscountReasonRequired => "reason required for discount",
            ErrorCode::SelectionEmpty => "selection is empty",
            ErrorCode::ItemNotSelected => "item is not part of the selection",

            ErrorCode::TermNotOffered => "term not offered by financing option",
            ErrorCode::InvalidRate => "interest rate must be a non-negative number",
            ErrorCode::NoFinancingSelected => "no financing option selected",

            ErrorCode::NonPositiveTarget => "target must be positive",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            9 => Ok(ErrorCode::InvalidAmount),

            1001 => Ok(ErrorCode::NegativePrice),
            1002 => Ok(ErrorCode::DiscountReasonRequired),
            1003 => Ok(ErrorCode::SelectionEmpty),
            1004 => Ok(ErrorCode::ItemNotSelected),

            2001 => Ok(ErrorCode::TermNotOffered),
            2002 => Ok(ErrorCode::InvalidRate),
            2003 => Ok(ErrorCode::NoFinancingSelected),

            3001 => Ok(ErrorCode::NonPositiveTarget),

            9001 => Ok(ErrorCode::InternalError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
