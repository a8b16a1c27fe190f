use serde::{Deserialize, Serialize};

/// Postal address embedded in customers and appointments.
///
/// Stored flattened as `address_street`, `address_city`, `address_state`
/// and `address_zip` columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}
