use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::currency::Currency;
use crate::timestamp::Timestamp;
use crate::util::invoice_id::InvoiceId;
use crate::util::money_amount::{self, MoneyAmount};

/// Body of `POST /tg-invoices`.
///
/// Only `amount`, `numPayments` and `currency` are always sent; the rest are
/// omitted until set.
///
/// ```rust
/// use tonrocket_types::currency::Currency;
/// use tonrocket_types::proto::CreateInvoiceRequest;
///
/// let request = CreateInvoiceRequest::new("2.5".parse().unwrap(), Currency::Toncoin)
///     .with_description("Coffee")
///     .with_expired_in(3600);
/// let json = serde_json::to_string(&request).unwrap();
/// assert!(json.contains(r#""amount":2.5"#));
/// assert!(json.contains(r#""expiredIn":3600"#));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInvoiceRequest {
    #[serde(serialize_with = "money_amount::serialize_as_number")]
    pub amount: MoneyAmount,
    #[serde(
        serialize_with = "money_amount::serialize_option_as_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_payment: Option<MoneyAmount>,
    /// How many times the invoice can be paid.
    pub num_payments: u32,
    pub currency: Currency,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Shown to the payer only after payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    /// Opaque application data echoed back on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Lifetime of the invoice in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_in: Option<u64>,
}

impl CreateInvoiceRequest {
    /// A single-payment invoice for `amount` of `currency`.
    pub fn new(amount: MoneyAmount, currency: Currency) -> Self {
        Self {
            amount,
            min_payment: None,
            num_payments: 1,
            currency,
            description: None,
            hidden_message: None,
            callback_url: None,
            payload: None,
            expired_in: None,
        }
    }

    pub fn with_min_payment(mut self, min_payment: MoneyAmount) -> Self {
        self.min_payment = Some(min_payment);
        self
    }

    pub fn with_num_payments(mut self, num_payments: u32) -> Self {
        self.num_payments = num_payments;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_hidden_message(mut self, hidden_message: impl Into<String>) -> Self {
        self.hidden_message = Some(hidden_message.into());
        self
    }

    pub fn with_callback_url(mut self, callback_url: impl Into<String>) -> Self {
        self.callback_url = Some(callback_url.into());
        self
    }

    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    pub fn with_expired_in(mut self, seconds: u64) -> Self {
        self.expired_in = Some(seconds);
        self
    }
}

/// An invoice as reported by the service.
///
/// The client never changes an invoice; it only decodes the state the
/// service sent. `activations_left <= total_activations` is expected but not
/// checked here. Optional fields sent as `null` decode to their defaults.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub amount: MoneyAmount,
    pub currency: Currency,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub hidden_message: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub payload: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub callback_url: String,
    #[serde(default)]
    pub created: Option<Timestamp>,
    /// Absent until the invoice has been paid.
    #[serde(default)]
    pub paid: Option<Timestamp>,
    /// Lifecycle status such as `active`, `paid` or `expired`, passed through as sent.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub expired_in: i64,
    /// Public payment link.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub link: String,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub total_activations: i64,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub activations_left: i64,
}

impl Invoice {
    pub const STATUS_PAID: &'static str = "paid";

    pub fn is_paid(&self) -> bool {
        self.status == Self::STATUS_PAID
    }

    /// Number of payments already made against a multi-payment invoice.
    pub fn activations_used(&self) -> i64 {
        self.total_activations
            .saturating_sub(self.activations_left)
            .max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_decode_invoice() {
        let wire = json!({
            "id": 42,
            "amount": "1.5",
            "currency": "TONCOIN",
            "description": "Coffee",
            "hiddenMessage": "thanks",
            "payload": "order-9",
            "callbackUrl": "https://t.me/shop_bot",
            "created": "2024-01-01T00:00:00Z",
            "paid": null,
            "status": "active",
            "expiredIn": 3600,
            "link": "https://t.me/tonRocketBot?start=inv_abc",
            "totalActivations": 3,
            "activationsLeft": 1
        });
        let invoice: Invoice = serde_json::from_str(&wire.to_string()).unwrap();
        assert_eq!(invoice.id.as_str(), "42");
        assert_eq!(invoice.amount.as_decimal(), Decimal::new(15, 1));
        assert_eq!(invoice.currency.to_string(), "TON");
        assert_eq!(invoice.created.unwrap().as_secs(), 1704067200);
        assert!(invoice.paid.is_none());
        assert!(!invoice.is_paid());
        assert_eq!(invoice.activations_used(), 2);
    }

    #[test]
    fn test_decode_invoice_tolerates_missing_optional_fields() {
        let invoice: Invoice =
            serde_json::from_str(r#"{"id":"7","amount":10,"currency":"TONCOIN","status":"paid"}"#)
                .unwrap();
        assert_eq!(invoice.id.to_string(), "7");
        assert_eq!(invoice.description, "");
        assert!(invoice.is_paid());
    }

    #[test]
    fn test_decode_invoice_with_null_optional_fields() {
        let wire = r#"{
            "id": "42",
            "amount": "1.5",
            "currency": "TONCOIN",
            "description": null,
            "hiddenMessage": null,
            "payload": null,
            "callbackUrl": null,
            "created": null,
            "paid": null,
            "status": null,
            "expiredIn": null,
            "link": null,
            "totalActivations": null,
            "activationsLeft": null
        }"#;
        let invoice: Invoice = serde_json::from_str(wire).unwrap();
        assert_eq!(invoice.id.as_str(), "42");
        assert_eq!(invoice.description, "");
        assert_eq!(invoice.hidden_message, "");
        assert_eq!(invoice.callback_url, "");
        assert_eq!(invoice.status, "");
        assert_eq!(invoice.expired_in, 0);
        assert_eq!(invoice.link, "");
        assert_eq!(invoice.activations_used(), 0);
        assert!(invoice.created.is_none());
    }

    #[test]
    fn test_decode_invoice_rejects_bad_amount() {
        let result = serde_json::from_str::<Invoice>(
            r#"{"id":"7","amount":"lots","currency":"TONCOIN"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_request_omits_unset_fields() {
        let request = CreateInvoiceRequest::new(MoneyAmount::from(5), Currency::Toncoin);
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"amount":5,"numPayments":1,"currency":"TONCOIN"}"#);
    }

    #[test]
    fn test_request_sends_amounts_as_exact_numbers() {
        let request = CreateInvoiceRequest::new("0.1".parse().unwrap(), Currency::Toncoin)
            .with_min_payment("0.05".parse().unwrap())
            .with_num_payments(10)
            .with_hidden_message("secret")
            .with_callback_url("https://example.com/back")
            .with_payload("p");
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""amount":0.1"#));
        assert!(json.contains(r#""minPayment":0.05"#));
        assert!(json.contains(r#""numPayments":10"#));
        assert!(json.contains(r#""hiddenMessage":"secret""#));
        assert!(json.contains(r#""callbackUrl":"https://example.com/back""#));
        assert!(json.contains(r#""payload":"p""#));
    }
}
