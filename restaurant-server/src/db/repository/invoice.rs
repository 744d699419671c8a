//! Invoice Repository

use super::{BaseRepository, RepoResult, new_id};
use crate::db::models::{Invoice, InvoiceCreate, InvoiceUpdate};
use crate::utils::time::{days_from_now_millis, now_millis};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "invoice";

/// Days until an invoice falls due when the payload does not say
const DEFAULT_DUE_DAYS: i64 = 1;

#[derive(Clone)]
pub struct InvoiceRepository {
    base: BaseRepository,
}

impl InvoiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Invoice>> {
        self.base.list(TABLE).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Invoice>> {
        self.base.get(TABLE, id).await
    }

    pub async fn create(&self, data: InvoiceCreate) -> RepoResult<Invoice> {
        let now = now_millis();
        let invoice_id = new_id();
        let invoice = Invoice {
            id: None,
            invoice_id: invoice_id.clone(),
            order_id: data.order_id,
            payment_method: data.payment_method,
            payment_status: data.payment_status.unwrap_or_default(),
            payment_due_date: data
                .payment_due_date
                .unwrap_or_else(|| days_from_now_millis(DEFAULT_DUE_DAYS)),
            created_at: now,
            updated_at: now,
        };
        self.base.insert(TABLE, &invoice_id, invoice).await
    }

    pub async fn update(&self, id: &str, data: InvoiceUpdate) -> RepoResult<Invoice> {
        self.base.merge(TABLE, "Invoice", id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.remove::<Invoice>(TABLE, id).await
    }
}
