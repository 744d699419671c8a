//! Food Repository

use super::{BaseRepository, RepoResult, new_id};
use crate::db::models::{Food, FoodCreate, FoodUpdate};
use crate::utils::time::now_millis;
use surrealdb::{RecordId, Surreal};
use surrealdb::engine::local::Db;

pub const TABLE: &str = "food";

#[derive(Clone)]
pub struct FoodRepository {
    base: BaseRepository,
}

impl FoodRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Food>> {
        self.base.list(TABLE).await
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Food>> {
        self.base.get(TABLE, id).await
    }

    /// Batch lookup used by the billing join
    pub async fn find_by_ids(&self, ids: &[String]) -> RepoResult<Vec<Food>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rids: Vec<RecordId> = ids
            .iter()
            .map(|id| RecordId::from_table_key(TABLE, id))
            .collect();
        let foods: Vec<Food> = self
            .base
            .db()
            .query("SELECT * FROM $rids")
            .bind(("rids", rids))
            .await?
            .take(0)?;
        Ok(foods)
    }

    pub async fn create(&self, data: FoodCreate) -> RepoResult<Food> {
        let now = now_millis();
        let food_id = new_id();
        let food = Food {
            id: None,
            food_id: food_id.clone(),
            name: data.name,
            price: data.price,
            food_image: data.food_image,
            menu_id: data.menu_id,
            created_at: now,
            updated_at: now,
        };
        self.base.insert(TABLE, &food_id, food).await
    }

    pub async fn update(&self, id: &str, data: FoodUpdate) -> RepoResult<Food> {
        self.base.merge(TABLE, "Food", id, &data).await
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        self.base.remove::<Food>(TABLE, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::repository::RepoError;

    async fn repo() -> FoodRepository {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        FoodRepository::new(service.db)
    }

    fn soup() -> FoodCreate {
        FoodCreate {
            name: "Tomato soup".to_string(),
            price: 6.5,
            food_image: "soup.png".to_string(),
            menu_id: None,
        }
    }

    #[tokio::test]
    async fn create_then_fetch_keeps_identifier() {
        let repo = repo().await;
        let created = repo.create(soup()).await.unwrap();
        let fetched = repo.find_by_id(&created.food_id).await.unwrap().unwrap();
        assert_eq!(fetched.food_id, created.food_id);
        assert_eq!(fetched.name, "Tomato soup");
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn partial_update_keeps_other_fields() {
        let repo = repo().await;
        let created = repo.create(soup()).await.unwrap();
        let updated = repo
            .update(
                &created.food_id,
                FoodUpdate {
                    price: Some(7.25),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.price, 7.25);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.food_image, created.food_image);
        assert_eq!(updated.food_id, created.food_id);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let repo = repo().await;
        let err = repo
            .update("missing", FoodUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_whether_anything_was_removed() {
        let repo = repo().await;
        let created = repo.create(soup()).await.unwrap();
        assert!(repo.delete(&created.food_id).await.unwrap());
        assert!(!repo.delete(&created.food_id).await.unwrap());
        assert!(repo.find_by_id(&created.food_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_ids_returns_only_requested() {
        let repo = repo().await;
        let a = repo.create(soup()).await.unwrap();
        let _b = repo.create(soup()).await.unwrap();
        let found = repo
            .find_by_ids(&[a.food_id.clone(), "missing".to_string()])
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].food_id, a.food_id);
    }
}
