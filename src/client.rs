//! HTTP client for the Rocket Pay REST API.
//!
//! [`RocketPayClient`] issues exactly one request per call against
//! `https://pay.ton-rocket.com`, authenticated with the static
//! `Rocket-Pay-Key` header, and decodes the response envelope into typed
//! values.
//!
//! ## Example
//!
//! ```rust,no_run
//! use tonrocket::client::RocketPayClient;
//! use tonrocket::proto::{CreateInvoiceRequest, Currency};
//!
//! # async fn run() -> Result<(), tonrocket::RocketPayError> {
//! let client = RocketPayClient::try_new("my-app-token")?;
//! let request = CreateInvoiceRequest::new("2.5".parse().unwrap(), Currency::Toncoin)
//!     .with_description("Coffee");
//! let invoice = client.create_invoice(&request).await?;
//! println!("pay at {}", invoice.link);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Failures are reported by [`RocketPayError`] and never retried:
//! - network, timeout and TLS failures
//! - bodies that are not a response envelope
//! - `success: false` envelopes, with the service's field errors
//! - `data` that does not decode into the expected type
//!
//! The client holds no mutable state; clone it or share it behind an `Arc`
//! across tasks. Dropping a returned future cancels its request.

use http::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, RequestBuilder};
use std::fmt::Display;
use std::time::Duration;
use tonrocket_types::proto::{AppInfo, CreateInvoiceRequest, CreateTransferRequest, Invoice, Transfer};
use url::Url;

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

use crate::config::Config;
use crate::envelope::decode_envelope;
use crate::error::RocketPayError;
use crate::rocket_pay::RocketPay;

/// `Rocket-Pay-Key`, the header carrying the application token.
pub const AUTH_HEADER: HeaderName = HeaderName::from_static("rocket-pay-key");

pub const MAINNET_API_URL: &str = "https://pay.ton-rocket.com";
/// Rocket Pay currently serves testing traffic from the production host.
pub const TESTNET_API_URL: &str = "https://pay.ton-rocket.com";

/// Resolves the API host for a testing-mode flag.
pub fn api_base_url(testing_mode: bool) -> &'static str {
    if testing_mode {
        TESTNET_API_URL
    } else {
        MAINNET_API_URL
    }
}

/// A client for the Rocket Pay application API.
#[derive(Clone, Debug)]
pub struct RocketPayClient {
    /// Base URL of the API (e.g. `https://pay.ton-rocket.com/`)
    base_url: Url,
    /// Full URL to `POST /tg-invoices` requests
    invoices_url: Url,
    /// Full URL to `POST /app/transfer` requests
    transfer_url: Url,
    /// Full URL to `GET /app/info` requests
    app_info_url: Url,
    /// Shared Reqwest HTTP client, carrying the overall timeout
    client: Client,
    /// `Rocket-Pay-Key` and any other headers sent with each request
    headers: HeaderMap,
    testing_mode: bool,
    timeout: Duration,
}

impl RocketPay for RocketPayClient {
    type Error = RocketPayError;

    async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<Invoice, RocketPayError> {
        RocketPayClient::create_invoice(self, request).await
    }

    async fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> Result<Transfer, RocketPayError> {
        RocketPayClient::create_transfer(self, request).await
    }

    async fn app_info(&self) -> Result<AppInfo, RocketPayError> {
        RocketPayClient::app_info(self).await
    }
}

impl RocketPayClient {
    /// Overall deadline applied to every request unless configured otherwise.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Constructs a production client for `token` with the default timeout.
    pub fn try_new(token: &str) -> Result<Self, RocketPayError> {
        let mut token = HeaderValue::from_str(token)?;
        token.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_HEADER, token);

        let base_url = parse_base_url(api_base_url(false))?;
        let client = build_http_client(Self::DEFAULT_TIMEOUT)?;
        Self::with_parts(base_url, client, headers, false, Self::DEFAULT_TIMEOUT)
    }

    /// Constructs a client from a [`Config`].
    pub fn from_config(config: &Config) -> Result<Self, RocketPayError> {
        Self::try_new(config.token().expose())?
            .with_testing_mode(config.testing_mode())?
            .with_timeout(config.timeout())
    }

    fn with_parts(
        base_url: Url,
        client: Client,
        headers: HeaderMap,
        testing_mode: bool,
        timeout: Duration,
    ) -> Result<Self, RocketPayError> {
        let join = |path: &str, context: &'static str| {
            base_url
                .join(path)
                .map_err(|source| RocketPayError::UrlParse { context, source })
        };
        let invoices_url = join("./tg-invoices", "Failed to construct ./tg-invoices URL")?;
        let transfer_url = join("./app/transfer", "Failed to construct ./app/transfer URL")?;
        let app_info_url = join("./app/info", "Failed to construct ./app/info URL")?;
        Ok(Self {
            base_url,
            invoices_url,
            transfer_url,
            app_info_url,
            client,
            headers,
            testing_mode,
            timeout,
        })
    }

    /// Returns the base URL used by this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn invoices_url(&self) -> &Url {
        &self.invoices_url
    }

    pub fn transfer_url(&self) -> &Url {
        &self.transfer_url
    }

    pub fn app_info_url(&self) -> &Url {
        &self.app_info_url
    }

    pub fn testing_mode(&self) -> bool {
        self.testing_mode
    }

    /// Returns the overall per-request deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Switches between the production and testing hosts.
    pub fn with_testing_mode(&self, testing_mode: bool) -> Result<Self, RocketPayError> {
        let base_url = parse_base_url(api_base_url(testing_mode))?;
        Self::with_parts(
            base_url,
            self.client.clone(),
            self.headers.clone(),
            testing_mode,
            self.timeout,
        )
    }

    /// Points the client at another host, such as a local stand-in for the API.
    pub fn with_base_url(&self, base_url: Url) -> Result<Self, RocketPayError> {
        let base_url = parse_base_url(base_url.as_str())?;
        Self::with_parts(
            base_url,
            self.client.clone(),
            self.headers.clone(),
            self.testing_mode,
            self.timeout,
        )
    }

    /// Replaces the overall deadline. Builds a new underlying HTTP client.
    pub fn with_timeout(&self, timeout: Duration) -> Result<Self, RocketPayError> {
        let mut this = self.clone();
        this.client = build_http_client(timeout)?;
        this.timeout = timeout;
        Ok(this)
    }

    /// Sends a `POST /tg-invoices` request.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "tonrocket.create_invoice",
            skip_all,
            fields(
                currency = %request.currency.code(),
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty
            ),
            err
        )
    )]
    pub async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<Invoice, RocketPayError> {
        self.post_envelope(&self.invoices_url, "POST /tg-invoices", request)
            .await
    }

    /// Sends a `POST /app/transfer` request.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "tonrocket.create_transfer",
            skip_all,
            fields(
                transfer_id = %request.transfer_id,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty
            ),
            err
        )
    )]
    pub async fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> Result<Transfer, RocketPayError> {
        self.post_envelope(&self.transfer_url, "POST /app/transfer", request)
            .await
    }

    /// Sends a `GET /app/info` request.
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "tonrocket.app_info",
            skip_all,
            fields(
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty
            ),
            err
        )
    )]
    pub async fn app_info(&self) -> Result<AppInfo, RocketPayError> {
        self.get_envelope(&self.app_info_url, "GET /app/info").await
    }

    /// POST helper: JSON body, `Content-Type: application/json`, envelope decode.
    async fn post_envelope<T, R>(
        &self,
        url: &Url,
        context: &'static str,
        payload: &T,
    ) -> Result<R, RocketPayError>
    where
        T: serde::Serialize + ?Sized,
        R: serde::de::DeserializeOwned,
    {
        let body = serde_json::to_vec(payload)
            .map_err(|source| RocketPayError::RequestEncode { context, source })?;
        let req = self
            .client
            .post(url.clone())
            .headers(self.headers.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .body(body);
        self.send_envelope(req, context).await
    }

    /// GET helper: no body, envelope decode.
    async fn get_envelope<R>(&self, url: &Url, context: &'static str) -> Result<R, RocketPayError>
    where
        R: serde::de::DeserializeOwned,
    {
        let req = self.client.get(url.clone()).headers(self.headers.clone());
        self.send_envelope(req, context).await
    }

    async fn send_envelope<R>(
        &self,
        req: RequestBuilder,
        context: &'static str,
    ) -> Result<R, RocketPayError>
    where
        R: serde::de::DeserializeOwned,
    {
        let http_response = req
            .send()
            .await
            .map_err(|source| RocketPayError::Transport { context, source })?;
        let status = http_response.status();
        #[cfg(feature = "telemetry")]
        tracing::debug!(%status, "{context} responded");

        let body = http_response
            .bytes()
            .await
            .map_err(|source| RocketPayError::Transport { context, source })?;

        let result = decode_envelope(context, status, &body);

        record_result_on_span(&result);

        result
    }
}

fn parse_base_url(value: &str) -> Result<Url, RocketPayError> {
    // Normalize: strip trailing slashes and add a single trailing slash
    let mut normalized = value.trim_end_matches('/').to_string();
    normalized.push('/');
    Url::parse(&normalized).map_err(|source| RocketPayError::UrlParse {
        context: "Failed to parse base url",
        source,
    })
}

fn build_http_client(timeout: Duration) -> Result<Client, RocketPayError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|source| RocketPayError::Transport {
            context: "Failed to build HTTP client",
            source,
        })
}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to Rocket Pay failed");
        }
    }
}

/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
