#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Wire types for the Rocket Pay payment API.
//!
//! This crate holds the data model and codecs only; it performs no I/O. The
//! HTTP client lives in the `tonrocket` crate.
//!
//! # Modules
//!
//! - [`currency`] - Currency codes and their display labels
//! - [`proto`] - Envelope, invoices, transfers, app info and webhook payloads
//! - [`timestamp`] - RFC 3339 timestamps normalized to UTC
//! - [`util`] - Codecs for exact decimal amounts and loosely-typed invoice ids

pub mod currency;
pub mod proto;
pub mod timestamp;
pub mod util;
