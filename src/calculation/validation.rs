//! Monetary input validation and coercion.
//!
//! Two parsing paths exist. The strict path ([`parse_amount`]) covers the
//! gross income, legacy allowances and tax relief fields: empty text is
//! zero, and anything else must be a non-negative decimal numeral. The
//! lenient path ([`coerce_amount`]) covers line-item values and day
//! counts: thousands separators are stripped and anything unparseable
//! degrades to zero instead of failing the calculation.

use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a non-negative decimal numeral.
///
/// Empty text counts as zero. Otherwise the text must consist of an
/// optional leading `+`, digits and at most one `.`, with at least one
/// digit overall. Signs other than `+`, scientific notation and
/// thousands separators are rejected.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::parse_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_amount(""), Some(Decimal::ZERO));
/// assert_eq!(parse_amount("12.50"), Some(Decimal::new(1250, 2)));
/// assert_eq!(parse_amount("-5"), None);
/// assert_eq!(parse_amount("abc"), None);
/// ```
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    if raw.is_empty() {
        return Some(Decimal::ZERO);
    }

    let digits = raw.strip_prefix('+').unwrap_or(raw);

    let mut seen_digit = false;
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return None,
        }
    }
    if !seen_digit {
        return None;
    }

    // `.5` and `5.` are legal numerals here; normalize them before
    // handing over to the decimal parser.
    let normalized = if let Some(stripped) = digits.strip_suffix('.') {
        stripped.to_string()
    } else if digits.starts_with('.') {
        format!("0{digits}")
    } else {
        digits.to_string()
    };

    Decimal::from_str(&normalized).ok()
}

/// Coerces raw item text to an amount, never failing.
///
/// Thousands separators are stripped first; empty or unparseable text
/// yields zero.
///
/// # Examples
///
/// ```
/// use paye_engine::calculation::coerce_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(coerce_amount("1,250.75"), Decimal::new(125075, 2));
/// assert_eq!(coerce_amount("garbage"), Decimal::ZERO);
/// ```
pub fn coerce_amount(raw: &str) -> Decimal {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    parse_amount(&cleaned).unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(parse_amount(""), Some(Decimal::ZERO));
    }

    #[test]
    fn test_plain_integer() {
        assert_eq!(parse_amount("1000"), Some(dec("1000")));
    }

    #[test]
    fn test_decimal_fraction() {
        assert_eq!(parse_amount("12.5"), Some(dec("12.5")));
    }

    #[test]
    fn test_leading_plus_accepted() {
        assert_eq!(parse_amount("+0.25"), Some(dec("0.25")));
    }

    #[test]
    fn test_bare_fraction_accepted() {
        assert_eq!(parse_amount(".5"), Some(dec("0.5")));
    }

    #[test]
    fn test_trailing_point_accepted() {
        assert_eq!(parse_amount("5."), Some(dec("5")));
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(parse_amount("-5"), None);
    }

    #[test]
    fn test_text_rejected() {
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("12a"), None);
    }

    #[test]
    fn test_scientific_notation_rejected() {
        assert_eq!(parse_amount("1e5"), None);
    }

    #[test]
    fn test_lone_point_rejected() {
        assert_eq!(parse_amount("."), None);
        assert_eq!(parse_amount("+."), None);
    }

    #[test]
    fn test_double_point_rejected() {
        assert_eq!(parse_amount("1.2.3"), None);
    }

    #[test]
    fn test_thousands_separator_rejected_by_strict_parse() {
        assert_eq!(parse_amount("1,000"), None);
    }

    #[test]
    fn test_lone_plus_rejected() {
        assert_eq!(parse_amount("+"), None);
    }

    #[test]
    fn test_coerce_strips_separators() {
        assert_eq!(coerce_amount("1,000"), dec("1000"));
        assert_eq!(coerce_amount("2,500.75"), dec("2500.75"));
    }

    #[test]
    fn test_coerce_garbage_to_zero() {
        assert_eq!(coerce_amount("abc"), Decimal::ZERO);
        assert_eq!(coerce_amount("-50"), Decimal::ZERO);
        assert_eq!(coerce_amount(""), Decimal::ZERO);
    }
}
