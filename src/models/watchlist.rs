use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user's declared interest in tracking one symbol.
///
/// `name` and `sector` are captured at add time and not re-synced if the
/// quote later changes. The symbol itself is a weak reference: resolving it
/// against the stock repository can come up empty, which callers treat as
/// "no display data", not an error.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::storage::schema::watchlist_items)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistEntry {
    pub id: Uuid,
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub sector: Option<String>,
    pub added_at: DateTime<Utc>,
}

/// Entry payload for watchlist adds; id and timestamp are store-assigned.
#[derive(Debug, Clone, Insertable, Serialize, Deserialize, ToSchema)]
#[diesel(table_name = crate::storage::schema::watchlist_items)]
#[serde(rename_all = "camelCase")]
pub struct NewWatchlistEntry {
    pub user_id: String,
    pub symbol: String,
    pub name: String,
    pub sector: Option<String>,
}
