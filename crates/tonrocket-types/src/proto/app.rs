use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::money_amount::MoneyAmount;

/// Response of `GET /app/info`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppInfo {
    /// Display name of the application.
    pub name: String,
    pub fee_percents: MoneyAmount,
    /// Balance records, left as open key/value maps.
    #[serde(default)]
    pub balances: Vec<Map<String, Value>>,
}
