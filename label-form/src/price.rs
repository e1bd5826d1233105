//! Price parsing, formatting and BGN/EUR conversion
//!
//! Prices travel as strings. A present price is always formatted with
//! exactly two decimals; an absent or unparseable one is the empty string.

use rust_decimal::prelude::*;

/// Fixed BGN per EUR rate (1.9558)
pub const EUR_TO_BGN_RATE: Decimal = Decimal::from_parts(19558, 0, 0, false, 4);

/// Decimal places of a formatted price
const DECIMAL_PLACES: u32 = 2;

/// Parse price text typed by the user
///
/// Accepts a comma as decimal separator and scientific notation.
pub fn parse_price(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    let normalized = input.replace(',', ".");
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
}

/// Round to cents, half away from zero
#[inline]
pub fn round_price(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Format a decimal with exactly two places
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.2}", round_price(value))
}

/// Normalize price text to two decimals, or empty when unusable
///
/// # Examples
///
/// ```
/// use label_form::price::format_price;
///
/// assert_eq!(format_price("12.5"), "12.50");
/// assert_eq!(format_price(""), "");
/// ```
pub fn format_price(input: &str) -> String {
    parse_price(input).map(format_decimal).unwrap_or_default()
}

/// EUR value derived from BGN price text, for auto-filling the EUR field
///
/// Empty or unparseable input clears the EUR field.
pub fn bgn_to_eur(bgn_input: &str) -> String {
    parse_price(bgn_input)
        .and_then(|bgn| bgn.checked_div(EUR_TO_BGN_RATE))
        .map(format_decimal)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("12"), "12.00");
        assert_eq!(format_price("12.5"), "12.50");
        assert_eq!(format_price(" 3.456 "), "3.46");
        assert_eq!(format_price("0.125"), "0.13");
        assert_eq!(format_price("7,9"), "7.90");
        assert_eq!(format_price("1e2"), "100.00");
    }

    #[test]
    fn test_unusable_price_is_empty() {
        assert_eq!(format_price(""), "");
        assert_eq!(format_price("   "), "");
        assert_eq!(format_price("abc"), "");
    }

    #[test]
    fn test_bgn_to_eur() {
        assert_eq!(bgn_to_eur("19.558"), "10.00");
        assert_eq!(bgn_to_eur("29.99"), "15.33");
        assert_eq!(bgn_to_eur("1"), "0.51");
        assert_eq!(bgn_to_eur(""), "");
        assert_eq!(bgn_to_eur("x"), "");
    }

    #[test]
    fn test_rate_constant() {
        assert_eq!(EUR_TO_BGN_RATE.to_string(), "1.9558");
    }
}
