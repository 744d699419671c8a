//! Menu Repository

use super::{BaseRepository, RepoResult, new_id};
use crate::db::models::{Menu, MenuCreate, MenuUpdate};
use crate::utils::time::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "menu";

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Menu>> {
        self.base.list(TABLE).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Menu>> {
        self.base.get(TABLE, id).await
    }

    pub async fn create(&self, data: MenuCreate) -> RepoResult<Menu> {
        let now = now_millis();
        let menu_id = new_id();
        let menu = Menu {
            id: None,
            menu_id: menu_id.clone(),
            name: data.name,
            category: data.category,
            start_date: data.start_date,
            end_date: data.end_date,
            created_at: now,
            updated_at: now,
        };
        self.base.insert(TABLE, &menu_id, menu).await
    }

    pub async fn update(&self, id: &str, data: MenuUpdate) -> RepoResult<Menu> {
        self.base.merge(TABLE, "Menu", id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.remove::<Menu>(TABLE, id).await
    }
}
