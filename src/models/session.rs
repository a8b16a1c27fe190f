use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side record behind the `sessionID` cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    #[serde(rename = "cookieID")]
    pub cookie_id: String,
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "expireTime")]
    pub expire_time: DateTime<Utc>,
}

impl Session {
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expire_time > now
    }
}

/// Storage shape: expiry is kept as unix milliseconds so it compares as an integer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SessionRow {
    pub cookie_id: String,
    pub user_id: i64,
    pub expire_time: i64,
}

impl From<SessionRow> for Session {
    fn from(row: SessionRow) -> Self {
        Session {
            cookie_id: row.cookie_id,
            user_id: row.user_id,
            expire_time: DateTime::from_timestamp_millis(row.expire_time).unwrap_or_default(),
        }
    }
}

impl From<Session> for SessionRow {
    fn from(session: Session) -> Self {
        SessionRow {
            cookie_id: session.cookie_id,
            user_id: session.user_id,
            expire_time: session.expire_time.timestamp_millis(),
        }
    }
}

/// Outcome of validating a session cookie against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCheck {
    /// Session was live and its expiry has been pushed forward.
    Valid { user_id: i64 },
    /// Session had expired and has been removed.
    Expired,
    Missing,
}
