//! en-IN / INR currency rendering.
//!
//! Amounts are rounded to whole paise (half away from zero) and grouped by the
//! ICU `en-IN` decimal formatter, e.g. `₹12,34,567.89`.

use fixed_decimal::FixedDecimal;
use icu::decimal::{options::FixedDecimalFormatterOptions, FixedDecimalFormatter};
use icu::locid::locale;
use shared::domain::Subunits;
use writeable::Writeable;

pub const CURRENCY_SYMBOL: &str = "₹";

thread_local! {
    static EN_IN_FORMATTER: Option<FixedDecimalFormatter> = build_formatter();
}

fn build_formatter() -> Option<FixedDecimalFormatter> {
    let options = FixedDecimalFormatterOptions::default();
    match FixedDecimalFormatter::try_new(&locale!("en-IN").into(), options) {
        Ok(formatter) => Some(formatter),
        Err(err) => {
            tracing::warn!("en-IN decimal formatter unavailable; amounts will be ungrouped: {err}");
            None
        }
    }
}

/// Formats an amount given in major units (rupees). NaN and infinities are
/// treated as zero.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    // `as` saturates on overflow.
    format_subunits(Subunits((amount * 100.0).round() as i64))
}

/// Same as [`format_currency`], with an absent amount treated as zero.
pub fn format_optional_currency(amount: Option<f64>) -> String {
    format_currency(amount.unwrap_or(0.0))
}

/// Formats an exact subunit amount.
pub fn format_subunits(amount: Subunits) -> String {
    let sign = if amount.0 < 0 { "-" } else { "" };
    let magnitude = amount.0.unsigned_abs();

    let mut decimal = FixedDecimal::from(magnitude);
    decimal.multiply_pow10(-2);
    decimal.pad_end(-2);

    let number = EN_IN_FORMATTER.with(|formatter| match formatter {
        Some(formatter) => formatter.format(&decimal).write_to_string().into_owned(),
        None => decimal.write_to_string().into_owned(),
    });
    format!("{sign}{CURRENCY_SYMBOL}{number}")
}

/// Formats a price for a display slot, e.g. `Rs. ₹250.00`.
pub fn display_price(prefix: &str, amount: Subunits) -> String {
    format!("{prefix}{}", format_subunits(amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_small_amounts_without_grouping() {
        assert_eq!(format_currency(0.0), "₹0.00");
        assert_eq!(format_currency(5.5), "₹5.50");
        assert_eq!(format_currency(250.0), "₹250.00");
        assert_eq!(format_currency(999.99), "₹999.99");
    }

    #[test]
    fn applies_indian_digit_grouping() {
        assert_eq!(format_currency(1000.0), "₹1,000.00");
        assert_eq!(format_currency(25000.0), "₹25,000.00");
        assert_eq!(format_currency(250000.0), "₹2,50,000.00");
        assert_eq!(format_currency(1234567.89), "₹12,34,567.89");
        assert_eq!(format_subunits(Subunits(1_000_000_000)), "₹1,00,00,000.00");
    }

    #[test]
    fn non_numeric_input_formats_as_zero() {
        let zero = format_currency(0.0);
        assert_eq!(format_currency(f64::NAN), zero);
        assert_eq!(format_currency(f64::INFINITY), zero);
        assert_eq!(format_optional_currency(None), zero);
        assert_eq!(format_optional_currency(Some(f64::NAN)), zero);
    }

    #[test]
    fn rounds_to_whole_paise() {
        assert_eq!(format_currency(1.005_1), "₹1.01");
        assert_eq!(format_currency(2.004), "₹2.00");
    }

    #[test]
    fn sub_rupee_amounts_keep_a_leading_zero() {
        assert_eq!(format_subunits(Subunits(5)), "₹0.05");
        assert_eq!(format_subunits(Subunits(50)), "₹0.50");
        assert_eq!(format_subunits(Subunits::ZERO), "₹0.00");
    }

    #[test]
    fn negative_amounts_carry_a_leading_sign() {
        assert_eq!(format_subunits(Subunits(-150_050)), "-₹1,500.50");
        assert_eq!(format_currency(-0.001), "₹0.00");
    }

    #[test]
    fn subunits_and_major_units_agree() {
        assert_eq!(format_subunits(Subunits(25_000)), format_currency(250.0));
        assert_eq!(display_price("Rs. ", Subunits(25_000)), "Rs. ₹250.00");
    }
}
