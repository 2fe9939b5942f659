use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Aggregate market index row (S&P 500, NASDAQ, ...).
///
/// Served from a fixed reference list; not persisted.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarketIndex {
    pub name: String,
    pub value: f64,
    pub change: f64,
    pub change_percent: f64,
}
