//! Order Repository

use super::{BaseRepository, RepoError, RepoResult, dining_table, new_id};
use crate::db::models::{DiningTable, Order, OrderCreate, OrderUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
}

impl OrderRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Order>> {
        self.base.list(TABLE).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Order>> {
        self.base.get(TABLE, id).await
    }

    /// Create an order, the referenced table must exist
    pub async fn create(&self, data: OrderCreate) -> RepoResult<Order> {
        if let Some(table_id) = &data.table_id {
            self.ensure_table(table_id).await?;
        }

        let now = now_millis();
        let order_id = new_id();
        let order = Order {
            id: None,
            order_id: order_id.clone(),
            order_date: data.order_date.unwrap_or(now),
            table_id: data.table_id,
            created_at: now,
            updated_at: now,
        };
        self.base.insert(TABLE, &order_id, order).await
    }

    /// Update an order, a changed table reference must exist
    ///
    /// A missing order wins over a bad table reference.
    pub async fn update(&self, id: &str, data: OrderUpdate) -> RepoResult<Order> {
        if !self.base.exists::<Order>(TABLE, id).await? {
            return Err(RepoError::NotFound(format!("Order {id} not found")));
        }
        if let Some(table_id) = &data.table_id {
            self.ensure_table(table_id).await?;
        }
        self.base.merge(TABLE, "Order", id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.remove::<Order>(TABLE, id).await
    }

    async fn ensure_table(&self, table_id: &str) -> RepoResult<()> {
        if self
            .base
            .exists::<DiningTable>(dining_table::TABLE, table_id)
            .await?
        {
            Ok(())
        } else {
            Err(RepoError::NotFound("Table was not found".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::DiningTableCreate;
    use crate::db::repository::DiningTableRepository;

    #[tokio::test]
    async fn create_requires_existing_table() {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        let orders = OrderRepository::new(service.db.clone());

        let err = orders
            .create(OrderCreate {
                order_date: None,
                table_id: Some("nope".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(msg) if msg == "Table was not found"));

        let table = DiningTableRepository::new(service.db.clone())
            .create(DiningTableCreate {
                table_number: 4,
                number_of_guests: 2,
            })
            .await
            .unwrap();
        let order = orders
            .create(OrderCreate {
                order_date: None,
                table_id: Some(table.table_id.clone()),
            })
            .await
            .unwrap();
        assert_eq!(order.table_id.as_deref(), Some(table.table_id.as_str()));
        assert_eq!(order.order_date, order.created_at);
    }

    #[tokio::test]
    async fn update_checks_new_table_reference() {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        let orders = OrderRepository::new(service.db.clone());
        let order = orders.create(OrderCreate::default()).await.unwrap();

        let err = orders
            .update(
                &order.order_id,
                OrderUpdate {
                    table_id: Some("nope".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));

        let updated = orders
            .update(
                &order.order_id,
                OrderUpdate {
                    order_date: Some(1_700_000_000_000),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.order_date, 1_700_000_000_000);
        assert!(updated.table_id.is_none());
    }

    #[tokio::test]
    async fn update_of_missing_order_is_reported_before_table() {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        let orders = OrderRepository::new(service.db.clone());

        let err = orders
            .update(
                "missing",
                OrderUpdate {
                    table_id: Some("nope".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(msg) if msg == "Order missing not found"));
    }
}
