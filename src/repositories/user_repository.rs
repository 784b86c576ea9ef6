use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::interceptors::AppResult;
use crate::models::User;

/// Persistence port for users
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;
    async fn insert(&self, user: User) -> AppResult<User>;
    async fn update(&self, user: User) -> AppResult<User>;
    /// Deleting a non-existent id is a no-op
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn insert(&self, user: User) -> AppResult<User> {
        let inserted = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, date_of_birth, email, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.date_of_birth)
        .bind(&user.email)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let updated = sqlx::query_as::<_, User>(
            "UPDATE users SET name = $2, date_of_birth = $3, email = $4
             WHERE id = $1
             RETURNING *",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(user.date_of_birth)
        .bind(&user.email)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
