//! Currency codes accepted by Rocket Pay.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A currency code as carried on the wire.
///
/// Only TON has a dedicated variant today. Any other code passes through
/// [`Currency::Other`] untouched, so new assets listed by the service decode
/// without a crate release.
///
/// [`Display`] renders the human label (`"TON"`), while [`Currency::code`]
/// returns the wire code (`"TONCOIN"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    #[default]
    Toncoin,
    Other(String),
}

impl Currency {
    pub const TONCOIN_CODE: &'static str = "TONCOIN";

    /// Returns the code sent to and received from the API.
    pub fn code(&self) -> &str {
        match self {
            Currency::Toncoin => Self::TONCOIN_CODE,
            Currency::Other(code) => code,
        }
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        if value == Self::TONCOIN_CODE {
            Currency::Toncoin
        } else {
            Currency::Other(value)
        }
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Currency::from(value.to_string())
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        match value {
            Currency::Toncoin => Currency::TONCOIN_CODE.to_string(),
            Currency::Other(code) => code,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Currency::Toncoin => f.write_str("TON"),
            Currency::Other(code) => f.write_str(code),
        }
    }
}
