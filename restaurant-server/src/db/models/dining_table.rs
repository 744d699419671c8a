//! Dining Table Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Dining table entity (桌台)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiningTable {
    /// Record id, keyed by the business identifier
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub table_id: String,
    pub table_number: i32,
    /// Seating capacity
    pub number_of_guests: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create dining table payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiningTableCreate {
    #[validate(range(min = 0))]
    pub table_number: i32,
    #[validate(range(min = 0))]
    pub number_of_guests: i32,
}

/// Update dining table payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct DiningTableUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub table_number: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0))]
    pub number_of_guests: Option<i32>,
}
