//! Exact decimal amounts for money and percentage fields.
//!
//! Rocket Pay sends amounts either as JSON strings (`"1.5"`) or as bare JSON
//! numbers (`1.5`, `1e3`). [`MoneyAmount`] decodes both from the raw token text
//! so no value ever passes through binary floating point.
//!
//! # Example
//!
//! ```rust
//! use tonrocket_types::util::money_amount::MoneyAmount;
//!
//! let amount: MoneyAmount = serde_json::from_str("\"10.50\"").unwrap();
//! assert_eq!(amount.scale(), 2);
//! assert_eq!(amount.to_string(), "10.5");
//!
//! let amount: MoneyAmount = serde_json::from_str("1e3").unwrap();
//! assert_eq!(amount, MoneyAmount::from(1000u64));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;

/// An exact decimal value as carried by the Rocket Pay API.
///
/// Equality is numeric: `"1.50"` and `"1.5"` decode to equal amounts, while
/// [`scale`](MoneyAmount::scale) still reports the precision of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MoneyAmount(pub Decimal);

/// Errors that can occur when parsing a decimal amount.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum MoneyAmountParseError {
    /// The input is empty or only whitespace.
    #[error("Empty decimal value")]
    Empty,
    /// The input is not an integer, fraction, or exponent-form number.
    #[error("Invalid decimal format: {0}")]
    InvalidFormat(String),
}

impl MoneyAmount {
    /// Parses the lexical form of a JSON number into an exact decimal.
    ///
    /// Accepts `"42"`, `"-0.001"`, `"1.5e-3"`, `"2E+2"`. Surrounding whitespace
    /// is ignored; anything else is rejected.
    pub fn parse(input: &str) -> Result<Self, MoneyAmountParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(MoneyAmountParseError::Empty);
        }
        let invalid = || MoneyAmountParseError::InvalidFormat(trimmed.to_string());
        if !trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
        {
            return Err(invalid());
        }
        let decimal = if trimmed.contains(['e', 'E']) {
            Decimal::from_scientific(trimmed).map_err(|_| invalid())?
        } else {
            Decimal::from_str_exact(trimmed).map_err(|_| invalid())?
        };
        Ok(MoneyAmount(decimal))
    }

    /// Decodes the raw text of a JSON token, which may be a string or a number.
    fn from_raw_json(raw: &str) -> Result<Self, MoneyAmountParseError> {
        let raw = raw.trim();
        if raw.starts_with('"') {
            let text: String = serde_json::from_str(raw)
                .map_err(|_| MoneyAmountParseError::InvalidFormat(raw.to_string()))?;
            Self::parse(&text)
        } else {
            Self::parse(raw)
        }
    }

    /// Returns the number of decimal places carried by the value.
    pub fn scale(&self) -> u32 {
        self.0.scale()
    }

    /// Returns the inner [`Decimal`].
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl FromStr for MoneyAmount {
    type Err = MoneyAmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoneyAmount::parse(s)
    }
}

impl TryFrom<&str> for MoneyAmount {
    type Error = MoneyAmountParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        MoneyAmount::from_str(value)
    }
}

impl From<Decimal> for MoneyAmount {
    fn from(value: Decimal) -> Self {
        MoneyAmount(value)
    }
}

impl From<u64> for MoneyAmount {
    fn from(value: u64) -> Self {
        MoneyAmount(Decimal::from(value))
    }
}

impl From<MoneyAmount> for Decimal {
    fn from(value: MoneyAmount) -> Self {
        value.0
    }
}

impl Display for MoneyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

/// Serialized as a decimal string (`"1.50"`), keeping the input scale.
impl Serialize for MoneyAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for MoneyAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        MoneyAmount::from_raw_json(raw.get()).map_err(serde::de::Error::custom)
    }
}

/// Serializes a [`MoneyAmount`] as a bare JSON number instead of a string.
///
/// The number is written from the decimal text, so `0.1` stays `0.1`.
///
/// ```rust
/// use serde::Serialize;
/// use tonrocket_types::util::money_amount::{self, MoneyAmount};
///
/// #[derive(Serialize)]
/// struct Body {
///     #[serde(serialize_with = "money_amount::serialize_as_number")]
///     amount: MoneyAmount,
/// }
///
/// let body = Body { amount: "0.1".parse().unwrap() };
/// assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"amount":0.1}"#);
/// ```
pub fn serialize_as_number<S: Serializer>(
    amount: &MoneyAmount,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let raw = RawValue::from_string(amount.0.to_string()).map_err(serde::ser::Error::custom)?;
    raw.serialize(serializer)
}

/// [`serialize_as_number`] for optional fields.
pub fn serialize_option_as_number<S: Serializer>(
    amount: &Option<MoneyAmount>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match amount {
        Some(amount) => serialize_as_number(amount, serializer),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_quoted_decimal() {
        let amount: MoneyAmount = serde_json::from_str("\"1.5\"").unwrap();
        assert_eq!(amount.0, Decimal::new(15, 1));
    }

    #[test]
    fn test_decode_bare_number_keeps_precision() {
        let amount: MoneyAmount = serde_json::from_str("0.30000000000000000001").unwrap();
        assert_eq!(amount.to_string(), "0.30000000000000000001");
    }

    #[test]
    fn test_decode_scientific_notation() {
        let amount: MoneyAmount = serde_json::from_str("1.5e-3").unwrap();
        assert_eq!(amount.0, Decimal::new(15, 4));
        let amount: MoneyAmount = serde_json::from_str("\"2E+2\"").unwrap();
        assert_eq!(amount, MoneyAmount::from(200u64));
    }

    #[test]
    fn test_decode_negative() {
        let amount: MoneyAmount = serde_json::from_str("\"-0.25\"").unwrap();
        assert_eq!(amount.0, Decimal::new(-25, 2));
    }

    #[test]
    fn test_decode_rejects_non_decimal() {
        assert!(serde_json::from_str::<MoneyAmount>("\"ten\"").is_err());
        assert!(serde_json::from_str::<MoneyAmount>("\"\"").is_err());
        assert!(serde_json::from_str::<MoneyAmount>("\"$10\"").is_err());
        assert!(serde_json::from_str::<MoneyAmount>("null").is_err());
        assert!(serde_json::from_str::<MoneyAmount>("true").is_err());
    }

    #[test]
    fn test_value_survives_decode_encode_decode() {
        for wire in ["\"1.50\"", "\"0\"", "\"123456789.000000001\"", "1e3", "\"-7.25\""] {
            let first: MoneyAmount = serde_json::from_str(wire).unwrap();
            let encoded = serde_json::to_string(&first).unwrap();
            let second: MoneyAmount = serde_json::from_str(&encoded).unwrap();
            assert_eq!(first, second, "value changed for {wire}");
        }
    }

    #[test]
    fn test_serialize_as_string_keeps_scale() {
        let amount = MoneyAmount::parse("1.50").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"1.50\"");
    }

    #[test]
    fn test_display_is_normalized() {
        assert_eq!(MoneyAmount::parse("1.500").unwrap().to_string(), "1.5");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(MoneyAmount::parse("  "), Err(MoneyAmountParseError::Empty));
        assert!(matches!(
            MoneyAmount::parse("1,000"),
            Err(MoneyAmountParseError::InvalidFormat(_))
        ));
    }
}
