//! Interpretation of the `{success, message, errors, data}` response envelope.
//!
//! Decoding happens in two stages so the three failure modes stay apart:
//!
//! 1. The body is parsed as an [`Envelope`] with `data` left raw. Anything that
//!    is not JSON, or lacks `success`, is a [`RocketPayError::MalformedEnvelope`].
//! 2. `success: false` becomes [`RocketPayError::Application`]; `data` is not
//!    looked at. `success: true` decodes `data` into the target type, and a
//!    mismatch there is a [`RocketPayError::Decode`].
//!
//! The HTTP status only annotates errors; the envelope decides the outcome.

use http::StatusCode;
use serde::de::DeserializeOwned;
use tonrocket_types::proto::Envelope;

use crate::error::RocketPayError;

/// Decodes a wrapped response body into `R`.
///
/// `context` names the call (e.g. `"POST /tg-invoices"`) in error messages.
pub fn decode_envelope<R>(
    context: &'static str,
    status: StatusCode,
    body: &[u8],
) -> Result<R, RocketPayError>
where
    R: DeserializeOwned,
{
    let envelope: Envelope = serde_json::from_slice(body).map_err(|source| {
        RocketPayError::MalformedEnvelope {
            context,
            status,
            source,
        }
    })?;
    let data = envelope
        .into_data()
        .map_err(|source| RocketPayError::Application { context, source })?;
    let raw = data.as_deref().map_or("null", |raw| raw.get());
    serde_json::from_str(raw).map_err(|source| RocketPayError::Decode { context, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonrocket_types::currency::Currency;
    use tonrocket_types::proto::{AppInfo, Invoice};
    use tonrocket_types::util::MoneyAmount;

    const CONTEXT: &str = "test";

    #[test]
    fn test_success_decodes_invoice() {
        let body = br#"{"success":true,"message":"","errors":null,"data":{
            "id":"42","amount":"1.5","currency":"TONCOIN","status":"active",
            "totalActivations":1,"activationsLeft":1}}"#;
        let invoice: Invoice = decode_envelope(CONTEXT, StatusCode::OK, body).unwrap();
        assert_eq!(invoice.id.as_str(), "42");
        assert_eq!(invoice.amount, "1.5".parse::<MoneyAmount>().unwrap());
        assert_eq!(invoice.currency, Currency::Toncoin);
        assert_eq!(invoice.currency.to_string(), "TON");
    }

    #[test]
    fn test_failure_becomes_application_error() {
        let body = br#"{"success":false,"message":"bad input","errors":[{"property":"amount","error":"too small"}]}"#;
        let err = decode_envelope::<Invoice>(CONTEXT, StatusCode::BAD_REQUEST, body).unwrap_err();
        let failure = err.api_failure().expect("application error");
        assert_eq!(failure.message, "bad input");
        assert_eq!(failure.errors.len(), 1);
        let text = err.to_string();
        assert!(text.contains("bad input"));
        assert!(text.contains("amount: too small"));
    }

    #[test]
    fn test_failure_wins_over_undecodable_data() {
        let body = br#"{"success":false,"message":"denied","errors":[],"data":{"id":null}}"#;
        let err = decode_envelope::<Invoice>(CONTEXT, StatusCode::OK, body).unwrap_err();
        assert!(err.api_failure().is_some());
    }

    #[test]
    fn test_non_json_body_is_malformed_envelope() {
        let body = b"<html>502 Bad Gateway</html>";
        let err = decode_envelope::<AppInfo>(CONTEXT, StatusCode::BAD_GATEWAY, body).unwrap_err();
        assert!(err.is_malformed_envelope());
        assert!(err.api_failure().is_none());
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn test_json_without_envelope_shape_is_malformed() {
        let err = decode_envelope::<AppInfo>(CONTEXT, StatusCode::OK, br#"[1,2,3]"#).unwrap_err();
        assert!(err.is_malformed_envelope());
    }

    #[test]
    fn test_bad_data_field_is_decode_error() {
        let body = br#"{"success":true,"data":{"id":"","amount":"1","currency":"TONCOIN"}}"#;
        let err = decode_envelope::<Invoice>(CONTEXT, StatusCode::OK, body).unwrap_err();
        assert!(err.is_decode());
        assert!(err.to_string().contains("unable to parse invoice_id"));

        let body = br#"{"success":true,"data":{"name":"x","feePercents":"1.2.3"}}"#;
        let err = decode_envelope::<AppInfo>(CONTEXT, StatusCode::OK, body).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_missing_data_decodes_as_null() {
        let body = br#"{"success":true,"message":"ok"}"#;
        let unit: Option<AppInfo> = decode_envelope(CONTEXT, StatusCode::OK, body).unwrap();
        assert!(unit.is_none());
        let err = decode_envelope::<AppInfo>(CONTEXT, StatusCode::OK, body).unwrap_err();
        assert!(err.is_decode());
    }
}
