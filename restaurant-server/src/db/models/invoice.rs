//! Invoice Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::billing::BillLine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentMethod {
    Card,
    Cash,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
}

/// Invoice entity (账单)
///
/// Totals are not stored; see [`InvoiceView`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Record id, keyed by the business identifier
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub invoice_id: String,
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub payment_status: PaymentStatus,
    pub payment_due_date: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Create invoice payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceCreate {
    pub order_id: String,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    /// Defaults to `PENDING`
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    /// Defaults to one day from now
    #[serde(default)]
    pub payment_due_date: Option<i64>,
}

/// Update invoice payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InvoiceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<PaymentStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_due_date: Option<i64>,
}

/// Invoice enriched with the bill of its order, computed on read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceView {
    pub invoice_id: String,
    pub order_id: String,
    pub payment_method: Option<PaymentMethod>,
    pub payment_status: PaymentStatus,
    pub payment_due_date: i64,
    pub payment_due: f64,
    pub table_number: Option<i32>,
    pub order_details: Vec<BillLine>,
}
