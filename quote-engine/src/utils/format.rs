//! Display formatting for quotes

use rust_decimal::prelude::*;
use shared::models::REVOLVING_TERM;

/// Format an amount as US dollars: `$1,234.56`, `-$80.00`
///
/// # Examples
///
/// ```
/// use quote_engine::utils::format::format_currency;
///
/// assert_eq!(format_currency(14995.0), "$14,995.00");
/// assert_eq!(format_currency(149.955), "$149.96");
/// ```
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    // Beyond Decimal's range, fall back to plain f64 formatting
    let (negative, fixed) = match Decimal::from_f64(amount) {
        Some(value) => {
            let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            (rounded.is_sign_negative() && !rounded.is_zero(), format!("{:.2}", rounded.abs()))
        }
        None => (amount < 0.0, format!("{:.2}", amount.abs())),
    };
    let sign = if negative { "-" } else { "" };
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Human label for a financing term
///
/// `0` is a revolving account; whole years read as `"15 years (180 months)"`.
pub fn format_term(term_months: u32) -> String {
    match term_months {
        REVOLVING_TERM => "Revolving".to_string(),
        12 => "1 year (12 months)".to_string(),
        m if m % 12 == 0 => format!("{} years ({m} months)", m / 12),
        1 => "1 month".to_string(),
        m => format!("{m} months"),
    }
}
