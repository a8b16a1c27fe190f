use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{changed_one, user_exists, EntityStore};
use crate::models::{Customer, CustomerRow};

#[derive(Clone)]
pub struct CustomerStore {
    pool: SqlitePool,
}

impl CustomerStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for CustomerStore {
    type Record = Customer;

    async fn add_new(&self, record: Customer) -> Result<bool, sqlx::Error> {
        let row = CustomerRow::from(record);
        let result = sqlx::query(
            "INSERT INTO customers (user_id, first_name, last_name, email, phone,
                address_street, address_city, address_state, address_zip)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.user_id)
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.email)
        .bind(row.phone)
        .bind(row.address_street)
        .bind(row.address_city)
        .bind(row.address_state)
        .bind(row.address_zip)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Customer>, sqlx::Error> {
        let row = sqlx::query_as::<_, CustomerRow>("SELECT * FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Customer::from))
    }

    async fn get_all_by_owner(&self, owner_id: i64) -> Result<Option<Vec<Customer>>, sqlx::Error> {
        if !user_exists(&self.pool, owner_id).await? {
            return Ok(None);
        }

        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT * FROM customers WHERE user_id = ? AND deleted = 0
             ORDER BY last_name, first_name, id",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(Some(rows.into_iter().map(Customer::from).collect()))
    }

    async fn update_by_id(&self, id: i64, patch: Customer) -> Result<bool, sqlx::Error> {
        let row = CustomerRow::from(patch);
        let result = sqlx::query(
            "UPDATE customers SET first_name = ?, last_name = ?, email = ?, phone = ?,
                address_street = ?, address_city = ?, address_state = ?, address_zip = ?
             WHERE id = ? AND user_id = ? AND deleted = 0",
        )
        .bind(row.first_name)
        .bind(row.last_name)
        .bind(row.email)
        .bind(row.phone)
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
        let result = sqlx::query("UPDATE customers SET deleted = 1 WHERE id = ? AND deleted = 0")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(changed_one(&result))
    }
}
