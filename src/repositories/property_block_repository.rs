use async_trait::async_trait;
use chrono::NaiveDate;
#[cfg(test)]
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::interceptors::AppResult;
use crate::models::PropertyBlock;

/// Persistence port for property blocks
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyBlockRepository: Send + Sync {
    async fn find_by_property_and_date(
        &self,
        property_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<PropertyBlock>>;

    async fn find_by_property_and_range(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<PropertyBlock>>;

    async fn insert(&self, block: PropertyBlock) -> AppResult<PropertyBlock>;
    async fn update(&self, block: PropertyBlock) -> AppResult<PropertyBlock>;

    /// Batch delete; dates without a matching block are silently ignored
    async fn delete_by_property_and_dates(
        &self,
        property_id: Uuid,
        dates: Vec<NaiveDate>,
    ) -> AppResult<()>;

    async fn delete_by_property(&self, property_id: Uuid) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgPropertyBlockRepository {
    pool: PgPool,
}

impl PgPropertyBlockRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyBlockRepository for PgPropertyBlockRepository {
    async fn find_by_property_and_date(
        &self,
        property_id: Uuid,
        date: NaiveDate,
    ) -> AppResult<Option<PropertyBlock>> {
        let block = sqlx::query_as::<_, PropertyBlock>(
            "SELECT * FROM property_blocks WHERE property_id = $1 AND date = $2",
        )
        .bind(property_id)
        .bind(date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(block)
    }

    async fn find_by_property_and_range(
        &self,
        property_id: Uuid,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<Vec<PropertyBlock>> {
        let blocks = sqlx::query_as::<_, PropertyBlock>(
            "SELECT * FROM property_blocks
             WHERE property_id = $1 AND date BETWEEN $2 AND $3",
        )
        .bind(property_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await?;

        Ok(blocks)
    }

    async fn insert(&self, block: PropertyBlock) -> AppResult<PropertyBlock> {
        let inserted = sqlx::query_as::<_, PropertyBlock>(
            "INSERT INTO property_blocks (id, property_id, date, reason)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(block.id)
        .bind(block.property_id)
        .bind(block.date)
        .bind(&block.reason)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn update(&self, block: PropertyBlock) -> AppResult<PropertyBlock> {
        let updated = sqlx::query_as::<_, PropertyBlock>(
            "UPDATE property_blocks SET reason = $2 WHERE id = $1 RETURNING *",
        )
        .bind(block.id)
        .bind(&block.reason)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_property_and_dates(
        &self,
        property_id: Uuid,
        dates: Vec<NaiveDate>,
    ) -> AppResult<()> {
        sqlx::query("DELETE FROM property_blocks WHERE property_id = $1 AND date = ANY($2)")
            .bind(property_id)
            .bind(&dates)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_by_property(&self, property_id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM property_blocks WHERE property_id = $1")
            .bind(property_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
