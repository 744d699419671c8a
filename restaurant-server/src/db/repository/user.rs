//! User Repository

use super::{BaseRepository, RepoError, RepoResult, new_id};
use crate::db::models::{SignUpRequest, User};
use crate::utils::time::now_millis;
use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

pub const TABLE: &str = "user";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Serialize)]
struct TokenPatch {
    token: String,
    refresh_token: String,
}

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        self.base.get(TABLE, id).await
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        self.find_one_by(
            "SELECT * FROM type::table($table) WHERE email = $value LIMIT 1",
            email,
        )
        .await
    }

    pub async fn find_by_phone(&self, phone: &str) -> RepoResult<Option<User>> {
        self.find_one_by(
            "SELECT * FROM type::table($table) WHERE phone = $value LIMIT 1",
            phone,
        )
        .await
    }

    async fn find_one_by(&self, sql: &'static str, value: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query(sql)
            .bind(("table", TABLE))
            .bind(("value", value.to_string()))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// One page of users, oldest first
    pub async fn find_page(&self, offset: i64, limit: i64) -> RepoResult<Vec<User>> {
        let users: Vec<User> = self
            .base
            .db()
            .query(
                "SELECT * FROM type::table($table) ORDER BY created_at ASC LIMIT $limit START $start",
            )
            .bind(("table", TABLE))
            .bind(("limit", limit))
            .bind(("start", offset))
            .await?
            .take(0)?;
        Ok(users)
    }

    pub async fn count(&self) -> RepoResult<i64> {
        let rows: Vec<CountRow> = self
            .base
            .db()
            .query("SELECT count() AS count FROM type::table($table) GROUP ALL")
            .bind(("table", TABLE))
            .await?
            .take(0)?;
        Ok(rows.first().map(|row| row.count).unwrap_or(0))
    }

    /// Create a new user with a hashed password
    ///
    /// Email and phone must both be unused. A concurrent sign-up that slips
    /// past the lookup is still rejected by the unique indexes.
    pub async fn create(&self, data: SignUpRequest) -> RepoResult<User> {
        if self.find_by_email(&data.email).await?.is_some()
            || self.find_by_phone(&data.phone).await?.is_some()
        {
            return Err(duplicate_contact());
        }

        let hash_pass = User::hash_password(&data.password)
            .map_err(|e| RepoError::Database(format!("Failed to hash password: {e}")))?;

        let now = now_millis();
        let user_id = new_id();
        let user = User {
            id: None,
            user_id: user_id.clone(),
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            avatar: data.avatar,
            password: hash_pass,
            token: None,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        };
        self.base
            .insert(TABLE, &user_id, user)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => duplicate_contact(),
                other => other,
            })
    }

    /// Persist freshly issued tokens
    pub async fn update_tokens(
        &self,
        id: &str,
        token: String,
        refresh_token: String,
    ) -> RepoResult<User> {
        self.base
            .merge(
                TABLE,
                "User",
                id,
                &TokenPatch {
                    token,
                    refresh_token,
                },
            )
            .await
    }
}

fn duplicate_contact() -> RepoError {
    RepoError::Duplicate("this email or phone number already exists".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    fn signup(email: &str, phone: &str) -> SignUpRequest {
        SignUpRequest {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            password: "cobol-rules".to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            avatar: None,
        }
    }

    async fn repo() -> UserRepository {
        let service = DbService::open_in_memory("test", "test").await.unwrap();
        UserRepository::new(service.db)
    }

    #[tokio::test]
    async fn create_hashes_password_and_finds_by_email() {
        let repo = repo().await;
        let user = repo.create(signup("grace@example.com", "1")).await.unwrap();
        assert_ne!(user.password, "cobol-rules");

        let found = repo
            .find_by_email("grace@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.user_id, user.user_id);
        assert!(found.verify_password("cobol-rules").unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_or_phone_is_rejected() {
        let repo = repo().await;
        repo.create(signup("grace@example.com", "1")).await.unwrap();

        let err = repo
            .create(signup("grace@example.com", "2"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));

        let err = repo
            .create(signup("other@example.com", "1"))
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
    }

    #[tokio::test]
    async fn unique_index_rejects_duplicate_email_without_lookup() {
        let repo = repo().await;
        let first = repo.create(signup("grace@example.com", "1")).await.unwrap();

        // Same email under a fresh key, bypassing the lookup in `create`
        let twin = User {
            user_id: new_id(),
            phone: "2".to_string(),
            ..first
        };
        let err = repo
            .base
            .insert(TABLE, &twin.user_id.clone(), twin)
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn pages_and_count() {
        let repo = repo().await;
        assert_eq!(repo.count().await.unwrap(), 0);
        for i in 0..3 {
            repo.create(signup(&format!("u{i}@example.com"), &i.to_string()))
                .await
                .unwrap();
        }
        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(repo.find_page(0, 2).await.unwrap().len(), 2);
        assert_eq!(repo.find_page(2, 2).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn update_tokens_persists_both() {
        let repo = repo().await;
        let user = repo.create(signup("grace@example.com", "1")).await.unwrap();
        let updated = repo
            .update_tokens(&user.user_id, "a".to_string(), "r".to_string())
            .await
            .unwrap();
        assert_eq!(updated.token.as_deref(), Some("a"));
        assert_eq!(updated.refresh_token.as_deref(), Some("r"));
        assert_eq!(updated.email, user.email);
    }
}
