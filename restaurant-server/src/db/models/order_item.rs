//! Order Item Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Portion size of an order line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    S,
    M,
    L,
}

/// Order item entity (订单明细)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    /// Record id, keyed by the business identifier
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub order_item_id: String,
    pub quantity: Quantity,
    pub unit_price: f64,
    pub food_id: String,
    pub order_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

/// One line of an [`OrderItemPack`]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemCreate {
    pub quantity: Quantity,
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub unit_price: f64,
    #[validate(length(min = 1))]
    pub food_id: String,
}

/// Create order items payload
///
/// Without `order_id` a new order is opened for `table_id`;
/// with `order_id` the items join that existing order.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemPack {
    #[serde(default)]
    pub table_id: Option<String>,
    #[serde(default)]
    pub order_id: Option<String>,
    #[validate(length(min = 1), nested)]
    pub order_items: Vec<OrderItemCreate>,
}

/// Response of a pack creation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemPackCreated {
    pub order_id: String,
    pub order_items: Vec<OrderItem>,
}

/// Update order item payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct OrderItemUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Quantity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 1_000_000.0))]
    pub unit_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub food_id: Option<String>,
}
