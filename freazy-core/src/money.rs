use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

use crate::error::InvoiceError;

/// Number of decimal places kept for every monetary value.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a value to two decimal places, halves away from zero.
///
/// Every monetary value produced anywhere in the crate goes through here.
///
/// # Example
///
/// ```rust
/// use freazy_core::money::round2;
/// use rust_decimal::Decimal;
///
/// let x = Decimal::new(30015, 3); // 30.015
/// assert_eq!(round2(x), Decimal::new(3002, 2));
/// ```
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Parses a user-entered amount, sent either as a JSON number or as the
/// string the user is still typing.
///
/// Blank input counts as zero, a lone comma is read as the decimal
/// separator and scientific notation is accepted. Finite values too small
/// for a [`Decimal`] read as zero. Anything else that is not a number, or
/// does not fit, is rejected.
pub fn parse_amount(raw: &str) -> Result<Decimal, InvoiceError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let normalized = if trimmed.contains(',') && !trimmed.contains('.') {
        trimmed.replace(',', ".")
    } else {
        trimmed.to_string()
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
        .or_else(|| from_float(&normalized))
        .ok_or_else(|| InvoiceError::InvalidAmount {
            value: raw.to_string(),
        })
}

/// Last resort for exponents outside the decimal range.
fn from_float(raw: &str) -> Option<Decimal> {
    let value = raw.parse::<f64>().ok().filter(|v| v.is_finite())?;
    if value.abs() < 1e-28 {
        return Some(Decimal::ZERO);
    }
    Decimal::from_f64(value)
}

/// Formats an already-rounded amount followed by its currency symbol.
pub fn format_money(amount: Decimal, symbol: &str) -> String {
    format!("{:.2} {}", round2(amount), symbol)
}

/// Formats a quantity or rate without trailing zeros (`2`, `1.5`, `5.5`).
pub fn format_plain(value: Decimal) -> String {
    value.normalize().to_string()
}

/// Wire shape of an amount: the form layer sends either.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(serde_json::Number),
    Text(String),
}

impl RawAmount {
    fn into_decimal(self) -> Result<Decimal, InvoiceError> {
        match self {
            RawAmount::Number(n) => parse_amount(&n.to_string()),
            RawAmount::Text(s) => parse_amount(&s),
        }
    }
}

/// `deserialize_with` helper for amount fields.
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    RawAmount::deserialize(deserializer)?
        .into_decimal()
        .map_err(serde::de::Error::custom)
}

/// `deserialize_with` helper for optional amount fields; `null` stays `None`.
pub fn deserialize_optional_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawAmount>::deserialize(deserializer)?
        .map(RawAmount::into_decimal)
        .transpose()
        .map_err(serde::de::Error::custom)
}
