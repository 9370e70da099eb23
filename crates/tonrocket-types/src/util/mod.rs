//! Codecs for the wire fields Rocket Pay does not type consistently.
//!
//! - [`money_amount`] - exact decimal amounts from strings or numbers
//! - [`invoice_id`] - digit-run extraction for invoice identifiers

pub mod invoice_id;
pub mod money_amount;

pub use invoice_id::{InvoiceId, InvoiceIdParseError};
pub use money_amount::{MoneyAmount, MoneyAmountParseError};
