//! Persistence layer. One store per entity family, each built around an
//! explicitly passed [`SqlitePool`] handle.

pub mod appointments;
pub mod auth;
pub mod customers;
pub mod invoices;
pub mod notes;
pub mod services;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteQueryResult};
use sqlx::SqlitePool;

pub use appointments::AppointmentStore;
pub use auth::AuthStore;
pub use customers::CustomerStore;
pub use invoices::InvoiceStore;
pub use notes::NoteStore;
pub use services::ServiceStore;

/// CRUD contract shared by every owned entity.
///
/// Writes report `true` only when exactly one row changed. Zero rows (record
/// missing, owned by someone else, or already tombstoned) is `false`, not an
/// error. `Err` is reserved for store failures.
#[async_trait]
pub trait EntityStore: Send + Sync {
    type Record: Send + 'static;

    async fn add_new(&self, record: Self::Record) -> Result<bool, sqlx::Error>;

    /// Returns tombstoned records too, with `deleted` set.
    async fn get_by_id(&self, id: i64) -> Result<Option<Self::Record>, sqlx::Error>;

    /// `None` when the owner does not exist, otherwise the live records
    /// (possibly none).
    async fn get_all_by_owner(
        &self,
        owner_id: i64,
    ) -> Result<Option<Vec<Self::Record>>, sqlx::Error>;

    /// Replaces the mutable columns of a live record owned by
    /// `patch`'s user.
    async fn update_by_id(&self, id: i64, patch: Self::Record) -> Result<bool, sqlx::Error>;

    /// Soft delete.
    async fn delete_by_id(&self, id: i64) -> Result<bool, sqlx::Error>;
}

/// Open a pool with foreign keys enforced.
pub async fn connect(url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options: SqliteConnectOptions = url.parse()?;
    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options.foreign_keys(true))
        .await
}

/// An in-memory store. Pinned to one connection so every query sees the same
/// database for the lifetime of the pool.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options: SqliteConnectOptions = "sqlite::memory:".parse()?;
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options.foreign_keys(true))
        .await
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

pub(crate) fn changed_one(result: &SqliteQueryResult) -> bool {
    result.rows_affected() == 1
}

pub(crate) async fn user_exists(pool: &SqlitePool, user_id: i64) -> Result<bool, sqlx::Error> {
    let row: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM users WHERE id = ?)")
        .bind(user_id)
        .fetch_one(pool)
        .await?;
    Ok(row.0)
}
