//! Dining Table Repository

use super::{BaseRepository, RepoResult, new_id};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "dining_table";

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all dining tables
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        self.base.list(TABLE).await
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        self.base.get(TABLE, id).await
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let now = now_millis();
        let table_id = new_id();
        let table = DiningTable {
            id: None,
            table_id: table_id.clone(),
            table_number: data.table_number,
            number_of_guests: data.number_of_guests,
            created_at: now,
            updated_at: now,
        };
        self.base.insert(TABLE, &table_id, table).await
    }

    /// Update a dining table
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        self.base.merge(TABLE, "Table", id, &data).await
    }

    /// Hard delete a dining table
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.remove::<DiningTable>(TABLE, id).await
    }
}
