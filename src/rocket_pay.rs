//! The operations offered by the Rocket Pay application API.
//!
//! [`RocketPay`] is implemented by [`RocketPayClient`](crate::client::RocketPayClient);
//! code that only needs the operations can depend on the trait and swap in a
//! stand-in for tests.

use std::fmt::{Debug, Display};
use std::sync::Arc;

use tonrocket_types::proto::{AppInfo, CreateInvoiceRequest, CreateTransferRequest, Invoice, Transfer};

pub trait RocketPay {
    /// The error type returned by this implementation.
    type Error: Debug + Display;

    /// Creates a payable invoice and returns it as stored by the service.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the request fails or the service rejects it.
    fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> impl Future<Output = Result<Invoice, Self::Error>> + Send;

    /// Moves funds from the application balance to a Telegram user.
    ///
    /// The returned [`Transfer`] carries the identifier assigned by the service.
    fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> impl Future<Output = Result<Transfer, Self::Error>> + Send;

    /// Fetches the application name, fee and balances.
    fn app_info(&self) -> impl Future<Output = Result<AppInfo, Self::Error>> + Send;
}

impl<T: RocketPay> RocketPay for Arc<T> {
    type Error = T::Error;

    fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> impl Future<Output = Result<Invoice, Self::Error>> + Send {
        self.as_ref().create_invoice(request)
    }

    fn create_transfer(
        &self,
        request: &CreateTransferRequest,
    ) -> impl Future<Output = Result<Transfer, Self::Error>> + Send {
        self.as_ref().create_transfer(request)
    }

    fn app_info(&self) -> impl Future<Output = Result<AppInfo, Self::Error>> + Send {
        self.as_ref().app_info()
    }
}
