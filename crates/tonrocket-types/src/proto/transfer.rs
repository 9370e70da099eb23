use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::currency::Currency;
use crate::util::money_amount::MoneyAmount;

/// A direct transfer from the application balance to a Telegram user.
///
/// Built by the caller and sent as-is to `POST /app/transfer`; the service
/// answers with the same shape, `id` filled in.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transfer {
    /// Assigned by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Caller-chosen idempotency token.
    pub transfer_id: String,
    pub tg_user_id: i64,
    pub currency: Currency,
    pub amount: MoneyAmount,
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub description: String,
}

/// `POST /app/transfer` takes a [`Transfer`] without an `id`.
pub type CreateTransferRequest = Transfer;

impl Transfer {
    pub fn new(
        transfer_id: impl Into<String>,
        tg_user_id: i64,
        currency: Currency,
        amount: MoneyAmount,
    ) -> Self {
        Self {
            id: None,
            transfer_id: transfer_id.into(),
            tg_user_id,
            currency,
            amount,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
