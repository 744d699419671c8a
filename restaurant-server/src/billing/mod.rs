//! Billing Aggregator
//!
//! 将订单明细与菜品、订单、桌台关联，汇总为单个账单文档。
//!
//! # 流程
//!
//! ```text
//! match (order_id) → join food / order / table → project → group → total
//! ```
//!
//! 记录读取通过 [`BillingStore`] 完成，运行时使用 [`SurrealBillingStore`]，
//! 测试可以替换为内存实现。

pub mod pipeline;
mod store;

pub use store::SurrealBillingStore;

use serde::{Deserialize, Serialize};

use crate::db::models::{DiningTable, Food, Invoice, InvoiceView, Order, OrderItem, Quantity};
use crate::db::repository::{RepoError, RepoResult};

/// One joined order item inside an [`OrderBill`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillLine {
    pub order_item_id: String,
    pub food_id: String,
    pub food_name: Option<String>,
    pub food_image: Option<String>,
    /// Food list price, `None` when the food record is gone
    pub price: Option<f64>,
    /// Price charged on this order
    pub unit_price: f64,
    pub quantity: Quantity,
}

/// Denormalized bill of one order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBill {
    pub order_id: String,
    pub table_id: Option<String>,
    pub table_number: Option<i32>,
    pub number_of_guests: Option<i32>,
    pub order_items: Vec<BillLine>,
    pub payment_due: f64,
    pub item_count: usize,
}

/// Record lookups the aggregator needs
#[allow(async_fn_in_trait)]
pub trait BillingStore {
    async fn items_for_order(&self, order_id: &str) -> RepoResult<Vec<OrderItem>>;
    async fn foods_by_ids(&self, food_ids: &[String]) -> RepoResult<Vec<Food>>;
    async fn order(&self, order_id: &str) -> RepoResult<Option<Order>>;
    async fn table(&self, table_id: &str) -> RepoResult<Option<DiningTable>>;
}

/// Billing service
#[derive(Clone)]
pub struct BillingService<S> {
    store: S,
}

impl<S: BillingStore> BillingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Aggregate the bill of `order_id`
    ///
    /// An order without items yields an empty bill with zero due.
    pub async fn bill_for_order(&self, order_id: &str) -> RepoResult<OrderBill> {
        let order = self.store.order(order_id).await?;
        self.aggregate(order_id, order).await
    }

    /// Join and group the items of `order_id` against an already loaded order
    async fn aggregate(&self, order_id: &str, order: Option<Order>) -> RepoResult<OrderBill> {
        let items = self.store.items_for_order(order_id).await?;

        let mut food_ids: Vec<String> = items.iter().map(|i| i.food_id.clone()).collect();
        food_ids.sort();
        food_ids.dedup();
        let foods = self.store.foods_by_ids(&food_ids).await?;

        let table = match order.as_ref().and_then(|o| o.table_id.as_deref()) {
            Some(table_id) => self.store.table(table_id).await?,
            None => None,
        };

        let orders: Vec<Order> = order.into_iter().collect();
        let tables: Vec<DiningTable> = table.into_iter().collect();
        let rows = pipeline::join(&items, &foods, &orders, &tables);

        let bill = pipeline::group(&rows)
            .into_iter()
            .next()
            .unwrap_or_else(|| pipeline::empty_bill(order_id, tables.first()));

        tracing::debug!(
            order_id = %order_id,
            items = bill.item_count,
            payment_due = bill.payment_due,
            "Bill aggregated"
        );
        Ok(bill)
    }

    /// Enrich an invoice with the bill of its order
    pub async fn invoice_view(&self, invoice: Invoice) -> RepoResult<InvoiceView> {
        let order = self.store.order(&invoice.order_id).await?.ok_or_else(|| {
            RepoError::NotFound(format!("Order {} not found", invoice.order_id))
        })?;

        let bill = self.aggregate(&invoice.order_id, Some(order)).await?;
        Ok(InvoiceView {
            invoice_id: invoice.invoice_id,
            order_id: invoice.order_id,
            payment_method: invoice.payment_method,
            payment_status: invoice.payment_status,
            payment_due_date: invoice.payment_due_date,
            payment_due: bill.payment_due,
            table_number: bill.table_number,
            order_details: bill.order_items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::PaymentStatus;
    use std::cell::Cell;

    #[derive(Default)]
    struct MemoryStore {
        items: Vec<OrderItem>,
        foods: Vec<Food>,
        orders: Vec<Order>,
        tables: Vec<DiningTable>,
        order_reads: Cell<usize>,
    }

    impl BillingStore for MemoryStore {
        async fn items_for_order(&self, order_id: &str) -> RepoResult<Vec<OrderItem>> {
            Ok(self
                .items
                .iter()
                .filter(|i| i.order_id == order_id)
                .cloned()
                .collect())
        }

        async fn foods_by_ids(&self, food_ids: &[String]) -> RepoResult<Vec<Food>> {
            Ok(self
                .foods
                .iter()
                .filter(|f| food_ids.contains(&f.food_id))
                .cloned()
                .collect())
        }

        async fn order(&self, order_id: &str) -> RepoResult<Option<Order>> {
            self.order_reads.set(self.order_reads.get() + 1);
            Ok(self.orders.iter().find(|o| o.order_id == order_id).cloned())
        }

        async fn table(&self, table_id: &str) -> RepoResult<Option<DiningTable>> {
            Ok(self.tables.iter().find(|t| t.table_id == table_id).cloned())
        }
    }

    fn fixture() -> MemoryStore {
        MemoryStore {
            items: vec![
                OrderItem {
                    id: None,
                    order_item_id: "i1".to_string(),
                    quantity: Quantity::S,
                    unit_price: 4.5,
                    food_id: "f1".to_string(),
                    order_id: "o1".to_string(),
                    created_at: 0,
                    updated_at: 0,
                },
                OrderItem {
                    id: None,
                    order_item_id: "i2".to_string(),
                    quantity: Quantity::L,
                    unit_price: 10.25,
                    food_id: "f2".to_string(),
                    order_id: "o1".to_string(),
                    created_at: 1,
                    updated_at: 1,
                },
            ],
            foods: vec![Food {
                id: None,
                food_id: "f1".to_string(),
                name: "Fries".to_string(),
                price: 5.0,
                food_image: "fries.png".to_string(),
                menu_id: None,
                created_at: 0,
                updated_at: 0,
            }],
            orders: vec![
                Order {
                    id: None,
                    order_id: "o1".to_string(),
                    order_date: 0,
                    table_id: Some("t1".to_string()),
                    created_at: 0,
                    updated_at: 0,
                },
                Order {
                    id: None,
                    order_id: "o2".to_string(),
                    order_date: 0,
                    table_id: Some("t1".to_string()),
                    created_at: 0,
                    updated_at: 0,
                },
            ],
            tables: vec![DiningTable {
                id: None,
                table_id: "t1".to_string(),
                table_number: 12,
                number_of_guests: 6,
                created_at: 0,
                updated_at: 0,
            }],
            order_reads: Cell::new(0),
        }
    }

    #[tokio::test]
    async fn bill_joins_all_records() {
        let service = BillingService::new(fixture());
        let bill = service.bill_for_order("o1").await.unwrap();

        assert_eq!(bill.order_id, "o1");
        assert_eq!(bill.table_number, Some(12));
        assert_eq!(bill.number_of_guests, Some(6));
        assert_eq!(bill.item_count, 2);
        assert_eq!(bill.payment_due, 14.75);
        assert_eq!(bill.order_items[0].food_name.as_deref(), Some("Fries"));
        // f2 has no food record, the line survives with empty food fields
        assert!(bill.order_items[1].food_name.is_none());
    }

    #[tokio::test]
    async fn order_without_items_has_empty_bill() {
        let service = BillingService::new(fixture());
        let bill = service.bill_for_order("o2").await.unwrap();
        assert!(bill.order_items.is_empty());
        assert_eq!(bill.payment_due, 0.0);
        assert_eq!(bill.table_number, Some(12));

        let unknown = service.bill_for_order("nope").await.unwrap();
        assert!(unknown.order_items.is_empty());
        assert_eq!(unknown.table_number, None);
    }

    #[tokio::test]
    async fn invoice_view_carries_bill_totals() {
        let service = BillingService::new(fixture());
        let invoice = Invoice {
            id: None,
            invoice_id: "inv1".to_string(),
            order_id: "o1".to_string(),
            payment_method: None,
            payment_status: PaymentStatus::Pending,
            payment_due_date: 99,
            created_at: 0,
            updated_at: 0,
        };
        let view = service.invoice_view(invoice.clone()).await.unwrap();
        assert_eq!(service.store.order_reads.get(), 1);
        assert_eq!(view.payment_due, 14.75);
        assert_eq!(view.table_number, Some(12));
        assert_eq!(view.order_details.len(), 2);
        assert_eq!(view.payment_due_date, 99);

        let orphan = Invoice {
            order_id: "gone".to_string(),
            ..invoice
        };
        let err = service.invoice_view(orphan).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }
}
