//! Parsing of pushed webhook notifications.
//!
//! Rocket Pay posts notifications to the application's callback endpoint as a
//! bare JSON object, not wrapped in the response envelope. Hand the raw request
//! body to [`parse_webhook_request`].
//!
//! No signature or origin check is performed. Applications that need to trust
//! the sender must verify it themselves before acting on the notification.

use tonrocket_types::proto::WebhookNotification;

use crate::error::RocketPayError;

/// Decodes a raw webhook body into a [`WebhookNotification`].
///
/// # Errors
///
/// [`RocketPayError::Decode`] if the body is not JSON or a field does not fit,
/// e.g. an invoice `id` without digits or a non-decimal `amount`.
pub fn parse_webhook_request(payload: &[u8]) -> Result<WebhookNotification, RocketPayError> {
    let notification = WebhookNotification::from_slice(payload).map_err(|source| {
        RocketPayError::Decode {
            context: "webhook payload",
            source,
        }
    });
    #[cfg(feature = "telemetry")]
    let notification = notification
        .inspect(|n| tracing::debug!(kind = %n.kind, invoice_id = %n.data.id, "Parsed webhook"))
        .inspect_err(|err| tracing::warn!(error = %err, "Rejected webhook payload"));
    notification
}
