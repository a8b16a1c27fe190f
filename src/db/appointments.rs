use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{changed_one, user_exists, EntityStore};
use crate::models::{Appointment, AppointmentRow};

#[derive(Clone)]
pub struct AppointmentStore {
    pool: SqlitePool,
}

impl AppointmentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for AppointmentStore {
    type Record = Appointment;

    async fn add_new(&self, record: Appointment) -> Result<bool, sqlx::Error> {
        let row = AppointmentRow::from(record);
        let result = sqlx::query(
            "INSERT INTO appointments (user_id, customer_id, title, description,
                time_date, time_start, time_end, time_exact,
                address_street, address_city, address_state, address_zip)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.user_id)
        .bind(row.customer_id)
        .bind(row.title)
        .bind(row.description)
        .bind(row.time_date)
        .bind(row.time_start)
        .bind(row.time_end)
        .bind(row.time_exact)
        .bind(row.address_street)
        .bind(row.address_city)
        .bind(row.address_state)
        .bind(row.address_zip)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Appointment>, sqlx::Error> {
        let row = sqlx::query_as::<_, AppointmentRow>("SELECT * FROM appointments WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Appointment::from))
    }

    async fn get_all_by_owner(
        &self,
        owner_id: i64,
    ) -> Result<Option<Vec<Appointment>>, sqlx::Error> {
        if !user_exists(&self.pool, owner_id).await? {
            return Ok(None);
        }

        let rows = sqlx::query_as::<_, AppointmentRow>(
            "SELECT * FROM appointments WHERE user_id = ? AND deleted = 0
             ORDER BY time_date, time_start, id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(Some(rows.into_iter().map(Appointment::from).collect()))
    }

    async fn update_by_id(&self, id: i64, patch: Appointment) -> Result<bool, sqlx::Error> {
        let row = AppointmentRow::from(patch);
        let result = sqlx::query(
            "UPDATE appointments SET customer_id = ?, title = ?, description = ?,
                time_date = ?, time_start = ?, time_end = ?, time_exact = ?,
                address_street = ?, address_city = ?, address_state = ?, address_zip = ?
             WHERE id = ? AND user_id = ? AND deleted = 0",
        )
        .bind(row.customer_id)
        .bind(row.title)
        .bind(row.description)
        .bind(row.time_date)
        .bind(row.time_start)
        .bind(row.time_end)
        .bind(row.time_exact)
        .bind(row.address_street)
        .bind(row.address_city)
        .bind(row.address_state)
        .bind(row.address_zip)
        .bind(id)
        .bind(row.user_id)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE appointments SET deleted = 1 WHERE id = ? AND deleted = 0")
                .bind(id)
                .execute(&self.pool)
                .await?;
        Ok(changed_one(&result))
    }
}
