//! User repository: persistence and queries for user profiles.
//!
//! Uses SqlitePoolManager and the UserProfile model. External: SQLite via sqlx; callers use the
//! [`UserStore`] trait (get / upsert_interest / find_by_interest).

use async_trait::async_trait;
use chrono::Utc;
use tracing::info;

use crate::error::StorageError;
use crate::models::UserProfile;
use crate::sqlite_pool::SqlitePoolManager;
use crate::store::UserStore;

#[derive(Clone)]
pub struct UserRepository {
    pool_manager: SqlitePoolManager,
}

impl UserRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), sqlx::Error> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                user_id TEXT PRIMARY KEY,
                interest TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_interest ON users(interest)")
            .execute(pool)
            .await?;

        info!("Database tables created successfully");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn get(&self, user_id: &str) -> Result<Option<UserProfile>, StorageError> {
        let pool = self.pool_manager.pool();

        let profile = sqlx::query_as::<_, UserProfile>("SELECT * FROM users WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(pool)
            .await?;

        Ok(profile)
    }

    async fn upsert_interest(&self, user_id: &str, interest: &str) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();
        let now = Utc::now();

        // Merge semantics: on conflict only interest and updated_at change, other columns keep
        // their stored values.
        sqlx::query(
            r#"
            INSERT INTO users (user_id, interest, created_at, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(user_id) DO UPDATE SET
                interest = excluded.interest,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(interest)
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        info!("Saved interest for user {}: {}", user_id, interest);
        Ok(())
    }

    async fn find_by_interest(
        &self,
        interest: &str,
        exclude_user_id: &str,
    ) -> Result<Vec<UserProfile>, StorageError> {
        let pool = self.pool_manager.pool();

        // SQLite TEXT equality is case-sensitive, matching the byte-for-byte contract.
        let profiles = sqlx::query_as::<_, UserProfile>(
            "SELECT * FROM users WHERE interest = ? AND user_id != ?",
        )
        .bind(interest)
        .bind(exclude_user_id)
        .fetch_all(pool)
        .await?;

        info!(
            "Found {} profile(s) with interest '{}'",
            profiles.len(),
            interest
        );
        Ok(profiles)
    }
}
