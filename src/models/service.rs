use serde::{Deserialize, Serialize};

/// Something a user sells, e.g. "Lawn mowing". Stored as-is, no flattening.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "userID", default)]
    pub user_id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub deleted: bool,
}
