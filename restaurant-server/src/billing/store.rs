//! SurrealDB-backed [`BillingStore`]

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use super::BillingStore;
use crate::db::models::{DiningTable, Food, Order, OrderItem};
use crate::db::repository::{
    DiningTableRepository, FoodRepository, OrderItemRepository, OrderRepository, RepoResult,
};

#[derive(Clone)]
pub struct SurrealBillingStore {
    items: OrderItemRepository,
    foods: FoodRepository,
    orders: OrderRepository,
    tables: DiningTableRepository,
}

impl SurrealBillingStore {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            items: OrderItemRepository::new(db.clone()),
            foods: FoodRepository::new(db.clone()),
            orders: OrderRepository::new(db.clone()),
            tables: DiningTableRepository::new(db),
        }
    }
}

impl BillingStore for SurrealBillingStore {
    async fn items_for_order(&self, order_id: &str) -> RepoResult<Vec<OrderItem>> {
        self.items.find_by_order(order_id).await
    }

    async fn foods_by_ids(&self, food_ids: &[String]) -> RepoResult<Vec<Food>> {
        self.foods.find_by_ids(food_ids).await
    }

    async fn order(&self, order_id: &str) -> RepoResult<Option<Order>> {
        self.orders.find_by_id(order_id).await
    }

    async fn table(&self, table_id: &str) -> RepoResult<Option<DiningTable>> {
        self.tables.find_by_id(table_id).await
    }
}
