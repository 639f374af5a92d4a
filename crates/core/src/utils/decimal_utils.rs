//! Decimal boundary conversions.
//!
//! Everything inside the engine is `rust_decimal::Decimal`, which cannot
//! represent NaN or infinity. Callers holding binary floats or raw form
//! input convert here; garbage is rejected with a typed error instead of
//! propagating into a calculation.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Converts a caller-supplied `f64` into a `Decimal`.
///
/// Rejects NaN and infinities; values beyond `Decimal`'s representable
/// range are also rejected.
pub fn decimal_from_f64(value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite(value).into());
    }
    Decimal::from_f64(value).ok_or_else(|| ValidationError::NonFinite(value).into())
}

/// Parses a decimal amount from user-entered text.
pub fn parse_amount(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::InvalidInput("empty amount".to_string()).into());
    }
    Ok(Decimal::from_str_exact(trimmed)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_finite_value_converts() {
        assert_eq!(decimal_from_f64(4875.83).unwrap(), dec!(4875.83));
    }

    #[test]
    fn test_nan_is_rejected() {
        assert!(decimal_from_f64(f64::NAN).is_err());
    }

    #[test]
    fn test_infinity_is_rejected() {
        assert!(decimal_from_f64(f64::INFINITY).is_err());
        assert!(decimal_from_f64(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("983.33").unwrap(), dec!(983.33));
        assert_eq!(parse_amount("  15000 ").unwrap(), dec!(15000));
    }

    #[test]
    fn test_parse_amount_rejects_garbage() {
        assert!(parse_amount("12,5").is_err());
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("   ").is_err());
    }
}
