use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::proto::Invoice;
use crate::timestamp::Timestamp;

/// Kind of a pushed notification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WebhookType {
    /// An invoice received a payment.
    InvoicePay,
    Other(String),
}

impl WebhookType {
    pub const INVOICE_PAY: &'static str = "invoicePay";

    pub fn as_str(&self) -> &str {
        match self {
            WebhookType::InvoicePay => Self::INVOICE_PAY,
            WebhookType::Other(value) => value,
        }
    }
}

impl From<String> for WebhookType {
    fn from(value: String) -> Self {
        if value == Self::INVOICE_PAY {
            WebhookType::InvoicePay
        } else {
            WebhookType::Other(value)
        }
    }
}

impl From<WebhookType> for String {
    fn from(value: WebhookType) -> Self {
        match value {
            WebhookType::InvoicePay => WebhookType::INVOICE_PAY.to_string(),
            WebhookType::Other(value) => value,
        }
    }
}

impl Display for WebhookType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A notification pushed by Rocket Pay to the application's webhook URL.
///
/// Not wrapped in the response envelope:
///
/// ```json
/// { "type": "invoicePay", "timestamp": "2024-01-01T00:00:00Z", "data": { "id": "7", ... } }
/// ```
///
/// Nothing here proves the payload came from Rocket Pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookNotification {
    #[serde(rename = "type")]
    pub kind: WebhookType,
    pub timestamp: Timestamp,
    /// Snapshot of the invoice at the time of the event.
    pub data: Invoice,
}

impl WebhookNotification {
    /// Decodes a raw webhook body.
    pub fn from_slice(payload: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(payload)
    }
}
