//! Pre-trade input validation.
//!
//! Pure checks run by the caller before any request is built. Each failure
//! names the specific rule violated; whether to log or re-prompt is the
//! caller's decision.

use rust_decimal::Decimal;
use thiserror::Error;

/// A validation rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Symbol contains characters outside `[A-Za-z0-9]` (or is empty).
    #[error("symbol {0:?} must be alphanumeric")]
    SymbolNotAlphanumeric(String),

    /// Symbol does not end with the USDT quote suffix.
    #[error("symbol {0:?} must end with USDT")]
    SymbolMissingUsdtSuffix(String),

    /// Value does not parse as a decimal number.
    #[error("{field} {value:?} is not a number")]
    NotANumber {
        /// Which input failed (`"quantity"` or `"price"`).
        field: &'static str,
        /// The rejected input.
        value: String,
    },

    /// Value parsed but is not strictly positive.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive {
        /// Which input failed (`"quantity"` or `"price"`).
        field: &'static str,
        /// The rejected value.
        value: Decimal,
    },
}

/// Check that a symbol is alphanumeric and USDT-quoted.
///
/// Case-sensitive: callers normalize to uppercase before calling;
/// `"btcusdt"` is rejected here.
pub fn validate_symbol(symbol: &str) -> Result<(), ValidationError> {
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ValidationError::SymbolNotAlphanumeric(symbol.to_string()));
    }
    if !symbol.ends_with("USDT") {
        return Err(ValidationError::SymbolMissingUsdtSuffix(symbol.to_string()));
    }
    Ok(())
}

/// Parse a quantity and check it is strictly positive.
pub fn validate_quantity(input: &str) -> Result<Decimal, ValidationError> {
    parse_positive("quantity", input)
}

/// Parse a price and check it is strictly positive.
pub fn validate_price(input: &str) -> Result<Decimal, ValidationError> {
    parse_positive("price", input)
}

fn parse_positive(field: &'static str, input: &str) -> Result<Decimal, ValidationError> {
    let value: Decimal = input.trim().parse().map_err(|_| ValidationError::NotANumber {
        field,
        value: input.to_string(),
    })?;

    if value <= Decimal::ZERO {
        return Err(ValidationError::NotPositive { field, value });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_valid_symbol() {
        assert!(validate_symbol("BTCUSDT").is_ok());
        assert!(validate_symbol("1000PEPEUSDT").is_ok());
    }

    #[test]
    fn test_lowercase_symbol_rejected() {
        // No normalization here: the caller uppercases first.
        assert_eq!(
            validate_symbol("btcusdt"),
            Err(ValidationError::SymbolMissingUsdtSuffix("btcusdt".into()))
        );
    }

    #[test]
    fn test_non_alphanumeric_symbol_rejected() {
        assert_eq!(
            validate_symbol("BTC-USDT"),
            Err(ValidationError::SymbolNotAlphanumeric("BTC-USDT".into()))
        );
        assert_eq!(
            validate_symbol(""),
            Err(ValidationError::SymbolNotAlphanumeric("".into()))
        );
    }

    #[test]
    fn test_wrong_suffix_rejected() {
        assert_eq!(
            validate_symbol("BTCUSD"),
            Err(ValidationError::SymbolMissingUsdtSuffix("BTCUSD".into()))
        );
    }

    #[test]
    fn test_valid_quantity() {
        assert_eq!(validate_quantity("1.5"), Ok(dec!(1.5)));
        assert_eq!(validate_quantity("0.001"), Ok(dec!(0.001)));
    }

    #[test]
    fn test_zero_and_negative_quantity_rejected() {
        assert_eq!(
            validate_quantity("0"),
            Err(ValidationError::NotPositive {
                field: "quantity",
                value: dec!(0),
            })
        );
        assert_eq!(
            validate_quantity("-3"),
            Err(ValidationError::NotPositive {
                field: "quantity",
                value: dec!(-3),
            })
        );
    }

    #[test]
    fn test_non_numeric_quantity_rejected() {
        assert_eq!(
            validate_quantity("abc"),
            Err(ValidationError::NotANumber {
                field: "quantity",
                value: "abc".into(),
            })
        );
    }

    #[test]
    fn test_price_uses_same_rules() {
        assert_eq!(validate_price("3000.25"), Ok(dec!(3000.25)));
        assert!(matches!(
            validate_price("-1"),
            Err(ValidationError::NotPositive { field: "price", .. })
        ));
        assert!(matches!(
            validate_price("1,5"),
            Err(ValidationError::NotANumber { field: "price", .. })
        ));
    }
}
