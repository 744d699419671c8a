//! Order Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Order entity (订单)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Record id, keyed by the business identifier
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub order_id: String,
    pub order_date: i64,
    /// Table the order is served at
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderCreate {
    /// Defaults to now
    #[serde(default)]
    pub order_date: Option<i64>,
    #[serde(default)]
    pub table_id: Option<String>,
}

/// Update order payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table_id: Option<String>,
}
