use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{changed_one, user_exists, EntityStore};
use crate::models::Service;

#[derive(Clone)]
pub struct ServiceStore {
    pool: SqlitePool,
}

impl ServiceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for ServiceStore {
    type Record = Service;

    async fn add_new(&self, record: Service) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO services (user_id, name, description, price) VALUES (?, ?, ?, ?)",
        )
        .bind(record.user_id)
        .bind(record.name)
        .bind(record.description)
        .bind(record.price)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>("SELECT * FROM services WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn get_all_by_owner(&self, owner_id: i64) -> Result<Option<Vec<Service>>, sqlx::Error> {
        if !user_exists(&self.pool, owner_id).await? {
            return Ok(None);
        }

        let services = sqlx::query_as::<_, Service>(
            "SELECT * FROM services WHERE user_id = ? AND deleted = 0 ORDER BY name, id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(Some(services))
    }

    async fn update_by_id(&self, id: i64, patch: Service) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE services SET name = ?, description = ?, price = ?
             WHERE id = ? AND user_id = ? AND deleted = 0",
        )
        .bind(patch.name)
        .bind(patch.description)
        .bind(patch.price)
        .bind(id)
        .bind(patch.user_id)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE services SET deleted = 1 WHERE id = ? AND deleted = 0")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(changed_one(&result))
    }
}
