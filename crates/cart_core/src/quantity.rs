//! Quantity field parsing.
//!
//! Mirrors the lenient leading-integer reading web forms apply: leading
//! whitespace is skipped, an optional sign is honoured, and parsing stops at the
//! first non-digit (`"3 units"` reads as 3, `"2.7"` as 2).

use crate::error::QuantityError;

pub const MIN_QUANTITY: u32 = 1;

pub fn parse_quantity(raw: &str) -> Result<u32, QuantityError> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(|byte| byte.is_ascii_digit())
        .count();
    if digits_len == 0 {
        return Err(QuantityError::NotANumber {
            raw: raw.to_string(),
        });
    }

    let magnitude = unsigned[..digits_len]
        .parse::<i64>()
        .map_err(|_| QuantityError::OutOfRange {
            raw: raw.to_string(),
        })?;
    let value = if negative { -magnitude } else { magnitude };

    if value < i64::from(MIN_QUANTITY) {
        return Err(QuantityError::BelowMinimum { value });
    }
    u32::try_from(value).map_err(|_| QuantityError::OutOfRange {
        raw: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_positive_integers() {
        assert_eq!(parse_quantity("1"), Ok(1));
        assert_eq!(parse_quantity("42"), Ok(42));
        assert_eq!(parse_quantity("007"), Ok(7));
    }

    #[test]
    fn reads_leading_integer_and_ignores_the_rest() {
        assert_eq!(parse_quantity("  3"), Ok(3));
        assert_eq!(parse_quantity("+4"), Ok(4));
        assert_eq!(parse_quantity("2.7"), Ok(2));
        assert_eq!(parse_quantity("5 pcs"), Ok(5));
    }

    #[test]
    fn rejects_zero_and_negatives() {
        assert_eq!(
            parse_quantity("0"),
            Err(QuantityError::BelowMinimum { value: 0 })
        );
        assert_eq!(
            parse_quantity("-2"),
            Err(QuantityError::BelowMinimum { value: -2 })
        );
    }

    #[test]
    fn rejects_non_numeric_input() {
        for raw in ["", "   ", "abc", "-", "+", ".5", "e3"] {
            assert!(
                matches!(parse_quantity(raw), Err(QuantityError::NotANumber { .. })),
                "{raw:?} should not parse"
            );
        }
    }

    #[test]
    fn rejects_values_that_do_not_fit() {
        assert!(matches!(
            parse_quantity("4294967296"),
            Err(QuantityError::OutOfRange { .. })
        ));
        assert!(matches!(
            parse_quantity("99999999999999999999999"),
            Err(QuantityError::OutOfRange { .. })
        ));
    }

    #[test]
    fn every_rejection_shares_the_user_warning() {
        let err = parse_quantity("zero").expect_err("should fail");
        assert_eq!(
            err.user_message(),
            "Quantity must be a valid number greater than 0"
        );
    }
}
