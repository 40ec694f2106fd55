use std::path::PathBuf;

use shared::error::{AppError, AppResult};

use crate::pricing::QuotePolicy;

/// Engine configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | CATALOG_PATH | (seed catalog) | JSON catalog snapshot |
/// | LOG_LEVEL | info | Log level when `RUST_LOG` is unset |
/// | LOG_DIR | (stderr) | Directory for daily log files |
/// | LOG_JSON | false | Emit log lines as JSON |
/// | ENVIRONMENT | development | Runtime environment |
/// | APPROVAL_THRESHOLD_PERCENT | 10 | Discount % needing manager approval |
/// | MATCH_BAND_PERCENT | 20 | Recommendation band around the target |
/// | RECOMMENDATION_LIMIT | 3 | Recommendations shown |
///
/// # Example
///
/// ```ignore
/// CATALOG_PATH=./catalog.json MATCH_BAND_PERCENT=10 quote-engine 250
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub log_dir: Option<String>,
    pub log_json: bool,
    /// development | staging | production
    pub environment: String,
    pub policy: QuotePolicy,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = QuotePolicy::default();
        let parsed = |key: &str| lookup(key).and_then(|v| v.trim().parse::<f64>().ok());

        Self {
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|d| !d.trim().is_empty()),
            log_json: lookup("LOG_JSON")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            policy: QuotePolicy {
                approval_threshold_percent: parsed("APPROVAL_THRESHOLD_PERCENT")
                    .unwrap_or(defaults.approval_threshold_percent),
                match_band: parsed("MATCH_BAND_PERCENT")
                    .map(|percent| percent / 100.0)
                    .unwrap_or(defaults.match_band),
                recommendation_limit: lookup("RECOMMENDATION_LIMIT")
                    .and_then(|v| v.trim().parse().ok())
                    .unwrap_or(defaults.recommendation_limit),
            },
        }
    }

    /// Reject policies the engine cannot work with
    pub fn validate(&self) -> AppResult<()> {
        let policy = &self.policy;
        if !policy.approval_threshold_percent.is_finite() || policy.approval_threshold_percent < 0.0 {
            return Err(AppError::config("APPROVAL_THRESHOLD_PERCENT must be a non-negative number")
                .with_detail("value", policy.approval_threshold_percent));
        }
        if !policy.match_band.is_finite() || !(0.0..1.0).contains(&policy.match_band) {
            return Err(AppError::config("MATCH_BAND_PERCENT must be between 0 and 100")
                .with_detail("value", policy.match_band * 100.0));
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
