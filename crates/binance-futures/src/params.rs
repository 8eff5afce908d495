//! Order request parameter construction.
//!
//! Parameters are built as an ordered list of pairs because insertion
//! order is part of the signed bytes; the transport appends the timing
//! fields and the signer consumes the final list as-is.

use crate::types::{OrderSide, OrderType, TimeInForce};
use rust_decimal::Decimal;

/// Parameters for a market order: `symbol, side, type, quantity`.
pub fn market_order(symbol: &str, side: OrderSide, quantity: Decimal) -> Vec<(&'static str, String)> {
    vec![
        ("symbol", symbol.to_string()),
        ("side", side.as_binance_str().to_string()),
        ("type", OrderType::Market.as_binance_str().to_string()),
        ("quantity", format_decimal(quantity)),
    ]
}

/// Parameters for a GTC limit order:
/// `symbol, side, type, timeInForce, quantity, price`.
pub fn limit_order(
    symbol: &str,
    side: OrderSide,
    quantity: Decimal,
    price: Decimal,
) -> Vec<(&'static str, String)> {
    vec![
        ("symbol", symbol.to_string()),
        ("side", side.as_binance_str().to_string()),
        ("type", OrderType::Limit.as_binance_str().to_string()),
        ("timeInForce", TimeInForce::GTC.as_binance_str().to_string()),
        ("quantity", format_decimal(quantity)),
        ("price", format_decimal(price)),
    ]
}

/// Render a decimal the way the server re-parses it: plain notation, no
/// exponent, trailing zeros trimmed. The same rendering feeds the signer
/// and the wire, so a formatting mismatch cannot break the signature.
pub fn format_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}
