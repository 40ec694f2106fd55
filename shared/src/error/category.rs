//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Pricing errors
/// - 2xxx: Financing errors
/// - 3xxx: Recommendation errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    General,
    Pricing,
    Financing,
    Recommendation,
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Pricing,
            2000..3000 => Self::Financing,
            3000..4000 => Self::Recommendation,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Pricing => "pricing",
            Self::Financing => "financing",
            Self::Recommendation => "recommendation",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }

    /// Whether this code is a caller-side validation failure
    ///
    /// Validation failures are returned to the host for display or retry;
    /// only system errors indicate a defect.
    pub fn is_validation(&self) -> bool {
        !self.is_success() && self.category() != ErrorCategory::System && *self != ErrorCode::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_ranges() {
        assert_eq!(ErrorCode::ValidationFailed.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::NegativePrice.category(), ErrorCategory::Pricing);
        assert_eq!(ErrorCode::TermNotOffered.category(), ErrorCategory::Financing);
        assert_eq!(
            ErrorCode::NonPositiveTarget.category(),
            ErrorCategory::Recommendation
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_is_validation() {
        assert!(ErrorCode::NegativePrice.is_validation());
        assert!(ErrorCode::DiscountReasonRequired.is_validation());
        assert!(ErrorCode::NonPositiveTarget.is_validation());
        assert!(!ErrorCode::InternalError.is_validation());
        assert!(!ErrorCode::Success.is_validation());
    }
}
