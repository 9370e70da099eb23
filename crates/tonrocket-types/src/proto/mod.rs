//! Wire types for the Rocket Pay REST API.
//!
//! Every wrapped response shares one envelope:
//!
//! ```json
//! {
//!   "success": false,
//!   "message": "Validation error",
//!   "errors": [ { "property": "amount", "error": "must be positive" } ],
//!   "data": null
//! }
//! ```
//!
//! [`Envelope`] keeps `data` as raw JSON so the caller decides how to decode it
//! only after `success` has been checked. Webhook payloads are not wrapped.
//!
//! # Key Types
//!
//! - [`Envelope`] / [`FieldError`] / [`ApiFailure`] - response wrapper and its failure form
//! - [`Invoice`] / [`CreateInvoiceRequest`] - `POST /tg-invoices`
//! - [`Transfer`] / [`CreateTransferRequest`] - `POST /app/transfer`
//! - [`AppInfo`] - `GET /app/info`
//! - [`WebhookNotification`] - pushed `invoicePay` events

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;
use serde_with::{DefaultOnNull, serde_as};
use std::fmt::{Display, Formatter};

mod app;
mod invoice;
mod transfer;
mod webhook;

pub use app::AppInfo;
pub use invoice::{CreateInvoiceRequest, Invoice};
pub use transfer::{CreateTransferRequest, Transfer};
pub use webhook::{WebhookNotification, WebhookType};

/// A single field-level validation error reported by the service.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Name of the offending request property.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub property: String,
    /// Error text for that property.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub error: String,
}

/// The response wrapper shared by all wrapped endpoints.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub message: String,
    /// Field errors in the order the service reported them.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub errors: Vec<FieldError>,
    /// Undecoded payload. Only meaningful when `success` is `true`.
    #[serde(default)]
    pub data: Option<Box<RawValue>>,
}

impl Envelope {
    /// Splits the envelope into its payload or an [`ApiFailure`].
    ///
    /// A `success: false` envelope never yields its `data`, even if the service
    /// filled it in partially.
    pub fn into_data(self) -> Result<Option<Box<RawValue>>, ApiFailure> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiFailure {
                message: self.message,
                errors: self.errors,
            })
        }
    }
}

/// An application-level failure: a well-formed envelope with `success: false`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiFailure {
    /// Human-readable message from the service.
    pub message: String,
    /// Field errors, in service order.
    pub errors: Vec<FieldError>,
}

impl ApiFailure {
    /// Returns the error text reported for `property`, if any.
    pub fn field_error(&self, property: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.property == property)
            .map(|e| e.error.as_str())
    }
}

impl Display for ApiFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} |", self.message)?;
        for field_error in &self.errors {
            write!(f, " {}: {}", field_error.property, field_error.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ApiFailure {}
