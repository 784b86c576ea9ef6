use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use sqlx::PgPool;
use uuid::Uuid;

use crate::interceptors::AppResult;
use crate::models::Property;

/// Persistence port for properties
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>>;
    async fn insert(&self, property: Property) -> AppResult<Property>;
    async fn update(&self, property: Property) -> AppResult<Property>;
    /// Deleting a non-existent id is a no-op
    async fn delete_by_id(&self, id: Uuid) -> AppResult<()>;
}

#[derive(Clone)]
pub struct PgPropertyRepository {
    pool: PgPool,
}

impl PgPropertyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PropertyRepository for PgPropertyRepository {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>> {
        let property = sqlx::query_as::<_, Property>("SELECT * FROM properties WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(property)
    }

    async fn insert(&self, property: Property) -> AppResult<Property> {
        let inserted = sqlx::query_as::<_, Property>(
            "INSERT INTO properties (
                 id, name, owner_user_id, address_line1, address_line2,
                 city, state, country, postal_code, price_per_guest, created_at
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING *",
        )
        .bind(property.id)
        .bind(&property.name)
        .bind(property.owner_user_id)
        .bind(&property.address_line1)
        .bind(&property.address_line2)
        .bind(&property.city)
        .bind(&property.state)
        .bind(&property.country)
        .bind(&property.postal_code)
        .bind(property.price_per_guest)
        .bind(property.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(inserted)
    }

    async fn update(&self, property: Property) -> AppResult<Property> {
        let updated = sqlx::query_as::<_, Property>(
            "UPDATE properties SET
                 name = $2, owner_user_id = $3, address_line1 = $4, address_line2 = $5,
                 city = $6, state = $7, country = $8, postal_code = $9, price_per_guest = $10
             WHERE id = $1
             RETURNING *",
        )
        .bind(property.id)
        .bind(&property.name)
        .bind(property.owner_user_id)
        .bind(&property.address_line1)
        .bind(&property.address_line2)
        .bind(&property.city)
        .bind(&property.state)
        .bind(&property.country)
        .bind(&property.postal_code)
        .bind(property.price_per_guest)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_by_id(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM properties WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
