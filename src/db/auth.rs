use chrono::{Duration, Utc};
use sqlx::SqlitePool;

use super::changed_one;
use crate::models::{NewUser, Session, SessionCheck, SessionRow, User};

/// Users and the sessions that authenticate them.
#[derive(Clone)]
pub struct AuthStore {
    pool: SqlitePool,
    session_ttl: Duration,
}

impl AuthStore {
    pub fn new(pool: SqlitePool, session_ttl: Duration) -> Self {
        Self { pool, session_ttl }
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    pub async fn add_user(&self, user: NewUser) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, email, password_hash)
             VALUES (?, ?, ?, ?)",
        )
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email.trim())
        .bind(user.password_hash)
        .execute(&self.pool)
        .await?;
        Ok(changed_one(&result))
    }

    /// Email comparison is case-insensitive (the column is `COLLATE NOCASE`).
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
            .bind(email.trim())
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn add_cookie(&self, id: &str, user_id: i64) -> Result<bool, sqlx::Error> {
        let expire_time = (Utc::now() + self.session_ttl).timestamp_millis();
        let result =
            sqlx::query("INSERT INTO sessions (cookie_id, user_id, expire_time) VALUES (?, ?, ?)")
                .bind(id)
                .bind(user_id)
                .bind(expire_time)
                .execute(&self.pool)
                .await?;
        Ok(changed_one(&result))
    }

    pub async fn get_cookie(&self, id: &str) -> Result<Option<Session>, sqlx::Error> {
        let row = sqlx::query_as::<_, SessionRow>("SELECT * FROM sessions WHERE cookie_id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Session::from))
    }

    /// Push the expiry out to one TTL from now.
    pub async fn update_cookie(&self, id: &str) -> Result<bool, sqlx::Error> {
        let expire_time = (Utc::now() + self.session_ttl).timestamp_millis();
        let result = sqlx::query("UPDATE sessions SET expire_time = ? WHERE cookie_id = ?")
            .bind(expire_time)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(changed_one(&result))
    }

    pub async fn remove_cookie(&self, id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE cookie_id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(changed_one(&result))
    }

    /// Validate a session cookie and slide or evict it in one transaction, so
    /// a concurrent request cannot refresh a session another one is removing.
    pub async fn check_cookie(&self, id: &str) -> Result<SessionCheck, sqlx::Error> {
        let now = Utc::now();
        let now_ms = now.timestamp_millis();
        let new_expiry = (now + self.session_ttl).timestamp_millis();

        let mut tx = self.pool.begin().await?;

        let refreshed: Option<(i64,)> = sqlx::query_as(
            "UPDATE sessions SET expire_time = ?
             WHERE cookie_id = ? AND expire_time > ?
             RETURNING user_id",
        )
        .bind(new_expiry)
        .bind(id)
        .bind(now_ms)
        .fetch_optional(&mut *tx)
        .await?;

        let check = match refreshed {
            Some((user_id,)) => SessionCheck::Valid { user_id },
            None => {
                let removed = sqlx::query("DELETE FROM sessions WHERE cookie_id = ?")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;
                if removed.rows_affected() > 0 {
                    SessionCheck::Expired
                } else {
                    SessionCheck::Missing
                }
            }
        };

        tx.commit().await?;
        Ok(check)
    }

    /// Drop every session whose expiry has passed. Returns how many were removed.
    pub async fn purge_expired(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE expire_time <= ?")
            .bind(Utc::now().timestamp_millis())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
