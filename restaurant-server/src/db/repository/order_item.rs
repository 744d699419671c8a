//! Order Item Repository

use super::{BaseRepository, RepoError, RepoResult, new_id, order};
use crate::db::models::{
    Order, OrderCreate, OrderItem, OrderItemCreate, OrderItemPack, OrderItemPackCreated,
    OrderItemUpdate,
};
use crate::db::repository::OrderRepository;
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "order_item";

#[derive(Clone)]
pub struct OrderItemRepository {
    base: BaseRepository,
}

impl OrderItemRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<OrderItem>> {
        self.base.list(TABLE).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<OrderItem>> {
        self.base.get(TABLE, id).await
    }

    /// All items of an order, in insertion order
    pub async fn find_by_order(&self, order_id: &str) -> RepoResult<Vec<OrderItem>> {
        let items: Vec<OrderItem> = self
            .base
            .db()
            .query(
                "SELECT * FROM type::table($table) WHERE order_id = $order_id ORDER BY created_at ASC",
            )
            .bind(("table", TABLE))
            .bind(("order_id", order_id.to_string()))
            .await?
            .take(0)?;
        Ok(items)
    }

    /// Attach one item to `order_id` (not checked)
    pub async fn create(&self, order_id: &str, data: OrderItemCreate) -> RepoResult<OrderItem> {
        let now = now_millis();
        let order_item_id = new_id();
        let item = OrderItem {
            id: None,
            order_item_id: order_item_id.clone(),
            quantity: data.quantity,
            unit_price: data.unit_price,
            food_id: data.food_id,
            order_id: order_id.to_string(),
            created_at: now,
            updated_at: now,
        };
        self.base.insert(TABLE, &order_item_id, item).await
    }

    /// Create a batch of items
    ///
    /// Opens a new order for `table_id` unless `order_id` names an existing one.
    pub async fn create_pack(&self, pack: OrderItemPack) -> RepoResult<OrderItemPackCreated> {
        let order_id = match pack.order_id {
            Some(order_id) => {
                if !self.base.exists::<Order>(order::TABLE, &order_id).await? {
                    return Err(RepoError::NotFound(format!("Order {order_id} not found")));
                }
                order_id
            }
            None => {
                OrderRepository::new(self.base.db().clone())
                    .create(OrderCreate {
                        order_date: None,
                        table_id: pack.table_id,
                    })
                    .await?
                    .order_id
            }
        };

        let mut order_items = Vec::with_capacity(pack.order_items.len());
        for item in pack.order_items {
            order_items.push(self.create(&order_id, item).await?);
        }

        tracing::debug!(order_id = %order_id, count = order_items.len(), "Order items created");
        Ok(OrderItemPackCreated {
            order_id,
            order_items,
        })
    }

    pub async fn update(&self, id: &str, data: OrderItemUpdate) -> RepoResult<OrderItem> {
        self.base.merge(TABLE, "Order item", id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.remove::<OrderItem>(TABLE, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::Quantity;

    fn line(food_id: &str, unit_price: f64) -> OrderItemCreate {
        OrderItemCreate {
            quantity: Quantity::M,
            unit_price,
            food_id: food_id.to_string(),
        }
    }

    #[tokio::test]
    async fn pack_without_order_opens_one() {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        let items = OrderItemRepository::new(service.db.clone());

        let created = items
            .create_pack(OrderItemPack {
                table_id: None,
                order_id: None,
                order_items: vec![line("f1", 3.0), line("f2", 4.5)],
            })
            .await
            .unwrap();

        assert_eq!(created.order_items.len(), 2);
        assert!(
            created
                .order_items
                .iter()
                .all(|item| item.order_id == created.order_id)
        );
        let order = OrderRepository::new(service.db.clone())
            .find_by_id(&created.order_id)
            .await
            .unwrap();
        assert!(order.is_some());

        let stored = items.find_by_order(&created.order_id).await.unwrap();
        assert_eq!(stored.len(), 2);
    }

    #[tokio::test]
    async fn pack_with_unknown_order_is_rejected() {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        let items = OrderItemRepository::new(service.db.clone());

        let err = items
            .create_pack(OrderItemPack {
                table_id: None,
                order_id: Some("missing".to_string()),
                order_items: vec![line("f1", 3.0)],
            })
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
        assert!(items.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn pack_with_existing_order_appends() {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        let items = OrderItemRepository::new(service.db.clone());
        let first = items
            .create_pack(OrderItemPack {
                table_id: None,
                order_id: None,
                order_items: vec![line("f1", 3.0)],
            })
            .await
            .unwrap();

        let second = items
            .create_pack(OrderItemPack {
                table_id: None,
                order_id: Some(first.order_id.clone()),
                order_items: vec![line("f2", 2.0)],
            })
            .await
            .unwrap();

        assert_eq!(second.order_id, first.order_id);
        assert_eq!(items.find_by_order(&first.order_id).await.unwrap().len(), 2);
    }
}
