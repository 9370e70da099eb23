//! Invoice identifiers with a loosely-typed wire form.
//!
//! The invoice `id` arrives as a JSON string on some endpoints and as a bare
//! JSON number on others. [`InvoiceId`] reads the raw token text whatever its
//! JSON type and keeps the longest run of ASCII digits found in it.
//!
//! The policy is lossy: any text containing digits is accepted, so treat the
//! identifier as opaque and do not expect the original representation back.

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;
use std::fmt::Display;
use std::str::FromStr;
use std::sync::LazyLock;

static DIGIT_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9]+").expect("valid digit-run pattern"));

/// Canonical, digits-only invoice identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvoiceId(String);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unable to parse invoice_id")]
pub struct InvoiceIdParseError;

impl InvoiceId {
    /// Extracts the longest digit run from `raw`. The leftmost run wins a tie.
    ///
    /// This differs from taking the first run: `"inv-7-20240101"` yields `20240101`,
    /// not `7`. Both agree on the plain `"123"` and `123` forms the service sends.
    pub fn extract(raw: &str) -> Result<Self, InvoiceIdParseError> {
        let mut longest: Option<&str> = None;
        for run in DIGIT_RUN.find_iter(raw).map(|m| m.as_str()) {
            if longest.is_none_or(|current| run.len() > current.len()) {
                longest = Some(run);
            }
        }
        longest
            .map(|digits| InvoiceId(digits.to_string()))
            .ok_or(InvoiceIdParseError)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for InvoiceId {
    type Err = InvoiceIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InvoiceId::extract(s)
    }
}

impl From<u64> for InvoiceId {
    fn from(value: u64) -> Self {
        InvoiceId(value.to_string())
    }
}

impl AsRef<str> for InvoiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for InvoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for InvoiceId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for InvoiceId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        InvoiceId::extract(raw.get()).map_err(serde::de::Error::custom)
    }
}
