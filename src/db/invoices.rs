use async_trait::async_trait;
use sqlx::SqlitePool;

use super::{changed_one, user_exists, EntityStore};
use crate::models::{Invoice, InvoiceRow};

#[derive(Clone)]
pub struct InvoiceStore {
    pool: SqlitePool,
}

impl InvoiceStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntityStore for InvoiceStore {
    type Record = Invoice;

    async fn add_new(&self, record: Invoice) -> Result<bool, sqlx::Error> {
        let row = InvoiceRow::from(record);
        let result = sqlx::query(
            "INSERT INTO invoices (user_id, customer_id, appointment_id, issue_date, due_date,
                items, paid)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(row.user_id)
        .bind(row.customer_id)
        .bind(row.appointment_id)
        .bind(row.issue_date)
        .bind(row.due_date)
        .bind(row.items)
        .bind(row.paid)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Invoice>, sqlx::Error> {
        let row = sqlx::query_as::<_, InvoiceRow>("SELECT * FROM invoices WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Invoice::from))
    }

    async fn get_all_by_owner(&self, owner_id: i64) -> Result<Option<Vec<Invoice>>, sqlx::Error> {
        if !user_exists(&self.pool, owner_id).await? {
            return Ok(None);
        }

        let rows = sqlx::query_as::<_, InvoiceRow>(
            "SELECT * FROM invoices WHERE user_id = ? AND deleted = 0
             ORDER BY issue_date DESC, id DESC",
        )
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(Some(rows.into_iter().map(Invoice::from).collect()))
    }

    async fn update_by_id(&self, id: i64, patch: Invoice) -> Result<bool, sqlx::Error> {
        let row = InvoiceRow::from(patch);
        let result = sqlx::query(
            "UPDATE invoices SET customer_id = ?, appointment_id = ?, issue_date = ?,
                due_date = ?, items = ?, paid = ?
             WHERE id = ? AND user_id = ? AND deleted = 0",
        )
        .bind(row.customer_id)
        .bind(row.appointment_id)
        .bind(row.issue_date)
        .bind(row.due_date)
        .bind(row.items)
        .bind(row.paid)
        .bind(id)
        .bind(row.user_id)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE invoices SET deleted = 1 WHERE id = ? AND deleted = 0")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(changed_one(&result))
    }
}
