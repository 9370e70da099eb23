//! Error type for Rocket Pay calls.
//!
//! Every failure is terminal for the call that produced it; the client never
//! retries. The variants separate where in the round trip things went wrong:
//!
//! - [`RocketPayError::Transport`] - the request never produced a readable response
//! - [`RocketPayError::MalformedEnvelope`] - the body is not a response envelope
//! - [`RocketPayError::Application`] - the envelope says `success: false`
//! - [`RocketPayError::Decode`] - `data` or a webhook body does not fit the target type

use http::StatusCode;
use http::header::InvalidHeaderValue;
use tonrocket_types::proto::ApiFailure;

#[derive(Debug, thiserror::Error)]
pub enum RocketPayError {
    #[error("URL parse error: {context}: {source}")]
    UrlParse {
        context: &'static str,
        #[source]
        source: url::ParseError,
    },
    #[error("API token is not a valid header value: {0}")]
    InvalidToken(#[from] InvalidHeaderValue),
    #[error("Failed to encode request body: {context}: {source}")]
    RequestEncode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("HTTP error: {context}: {source}")]
    Transport {
        context: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Malformed response envelope (HTTP {status}): {context}: {source}")]
    MalformedEnvelope {
        context: &'static str,
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
    #[error("Error received in response: {context}: {source}")]
    Application {
        context: &'static str,
        #[source]
        source: ApiFailure,
    },
    #[error("Failed to decode {context}: {source}")]
    Decode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl RocketPayError {
    /// Returns the service's failure report for `success: false` responses.
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            RocketPayError::Application { source, .. } => Some(source),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, RocketPayError::Transport { .. })
    }

    pub fn is_malformed_envelope(&self) -> bool {
        matches!(self, RocketPayError::MalformedEnvelope { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, RocketPayError::Decode { .. })
    }
}
