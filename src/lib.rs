//! Rust client for the [Rocket Pay](https://pay.ton-rocket.com) payment API.
//!
//! The crate wraps the three application endpoints of Rocket Pay and the
//! webhook it pushes:
//!
//! - `POST /tg-invoices` - [`RocketPayClient::create_invoice`]
//! - `POST /app/transfer` - [`RocketPayClient::create_transfer`]
//! - `GET /app/info` - [`RocketPayClient::app_info`]
//! - `invoicePay` notifications - [`parse_webhook_request`]
//!
//! # Modules
//!
//! - [`client`] - HTTP transport, host resolution and the `Rocket-Pay-Key` header.
//! - [`config`] - Token, testing mode and timeout, from code, JSON or environment.
//! - [`envelope`] - Decoding of the `{success, message, errors, data}` response wrapper.
//! - [`error`] - [`RocketPayError`] and its failure kinds.
//! - [`proto`] - Request and response types, re-exported from `tonrocket-types`.
//! - [`rocket_pay`] - The [`RocketPay`] trait describing the operations.
//! - [`webhook`] - Parsing of pushed notifications.
//!
//! Money amounts are exact decimals ([`proto::MoneyAmount`]) end to end.
//!
//! # Feature Flags
//!
//! - `telemetry` (default) - `tracing` spans and events for every call

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod rocket_pay;
pub mod webhook;

pub use tonrocket_types as types;

pub mod proto {
    //! Wire types, re-exported from `tonrocket-types`.

    pub use tonrocket_types::currency::Currency;
    pub use tonrocket_types::proto::*;
    pub use tonrocket_types::timestamp::Timestamp;
    pub use tonrocket_types::util::{InvoiceId, MoneyAmount};
}

pub use client::RocketPayClient;
pub use config::Config;
pub use error::RocketPayError;
pub use rocket_pay::RocketPay;
pub use webhook::parse_webhook_request;
