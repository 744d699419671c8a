//! Repository Module
//!
//! Record stores over the embedded SurrealDB handle, one per collection.

// Catalog
pub mod food;
pub mod menu;

// Location
pub mod dining_table;

// Orders
pub mod invoice;
pub mod order;
pub mod order_item;

// Auth
pub mod user;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use food::FoodRepository;
pub use invoice::InvoiceRepository;
pub use menu::MenuRepository;
pub use order::OrderRepository;
pub use order_item::OrderItemRepository;
pub use user::UserRepository;

use serde::Serialize;
use serde::de::DeserializeOwned;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};
use thiserror::Error;

use crate::utils::time::now_millis;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        match err {
            // UNIQUE 索引冲突
            surrealdb::Error::Db(surrealdb::error::Db::IndexExists { .. }) => {
                RepoError::Duplicate(err.to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention
// =============================================================================
//
// 业务 ID (uuid v4 simple) 同时作为 SurrealDB record key:
//   - 创建: RecordId::from_table_key("food", food_id)
//   - CRUD: db.select(rid) / db.update(rid) / db.delete(rid)
//
// `order` 是 SurrealQL 关键字, 查询语句统一用 type::table($table) 引用表名

/// Generate a new business identifier
pub fn new_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Base repository with database reference and the CRUD primitives
/// shared by every collection
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// All records of `table`, oldest first
    pub async fn list<T: DeserializeOwned>(&self, table: &'static str) -> RepoResult<Vec<T>> {
        let records: Vec<T> = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY created_at ASC")
            .bind(("table", table))
            .await?
            .take(0)?;
        Ok(records)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        table: &'static str,
        id: &str,
    ) -> RepoResult<Option<T>> {
        let record: Option<T> = self.db.select(RecordId::from_table_key(table, id)).await?;
        Ok(record)
    }

    pub async fn exists<T: DeserializeOwned>(
        &self,
        table: &'static str,
        id: &str,
    ) -> RepoResult<bool> {
        Ok(self.get::<T>(table, id).await?.is_some())
    }

    /// Store `record` under the key `id`
    pub async fn insert<T>(&self, table: &'static str, id: &str, record: T) -> RepoResult<T>
    where
        T: Serialize + DeserializeOwned + 'static,
    {
        let created: Option<T> = self
            .db
            .create(RecordId::from_table_key(table, id))
            .content(record)
            .await?;
        created.ok_or_else(|| RepoError::Database(format!("Failed to create {table} {id}")))
    }

    /// Merge the present fields of `patch` into an existing record,
    /// refreshing `updated_at`
    ///
    /// `label` names the entity in the not-found message.
    pub async fn merge<T, U>(
        &self,
        table: &'static str,
        label: &str,
        id: &str,
        patch: &U,
    ) -> RepoResult<T>
    where
        T: DeserializeOwned,
        U: Serialize,
    {
        if !self.exists::<T>(table, id).await? {
            return Err(RepoError::NotFound(format!("{label} {id} not found")));
        }

        let patch = merge_patch(patch)?;
        let updated: Option<T> = self
            .db
            .update(RecordId::from_table_key(table, id))
            .merge(patch)
            .await?;
        updated.ok_or_else(|| RepoError::NotFound(format!("{label} {id} not found")))
    }

    /// Hard delete, `false` when nothing was stored under `id`
    pub async fn remove<T: DeserializeOwned>(
        &self,
        table: &'static str,
        id: &str,
    ) -> RepoResult<bool> {
        let deleted: Option<T> = self.db.delete(RecordId::from_table_key(table, id)).await?;
        Ok(deleted.is_some())
    }
}

/// Serialize an update payload into a merge document stamped with `updated_at`
///
/// `None` fields are skipped by the payload's serde attributes, so only
/// supplied fields reach the store.
pub fn merge_patch<U: Serialize>(patch: &U) -> RepoResult<serde_json::Value> {
    let mut value =
        serde_json::to_value(patch).map_err(|e| RepoError::Validation(e.to_string()))?;
    let object = value
        .as_object_mut()
        .ok_or_else(|| RepoError::Validation("update payload must be an object".to_string()))?;
    object.insert("updated_at".to_string(), now_millis().into());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::FoodUpdate;

    #[test]
    fn merge_patch_keeps_only_supplied_fields() {
        let patch = merge_patch(&FoodUpdate {
            price: Some(12.5),
            ..Default::default()
        })
        .unwrap();
        let object = patch.as_object().unwrap();
        assert_eq!(object["price"], 12.5);
        assert!(object.contains_key("updated_at"));
        assert!(!object.contains_key("name"));
        assert!(!object.contains_key("food_id"));
    }

    #[test]
    fn new_ids_are_simple_uuids() {
        let id = new_id();
        assert_eq!(id.len(), 32);
        assert!(id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(id, new_id());
    }
}
