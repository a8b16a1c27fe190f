use serde::{Deserialize, Serialize};

use super::Address;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "userID", default)]
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub deleted: bool,
}

/// Flat storage shape of a [`Customer`].
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CustomerRow {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_street: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub deleted: bool,
}

impl From<CustomerRow> for Customer {
    fn from(row: CustomerRow) -> Self {
        Customer {
            id: row.id,
            user_id: row.user_id,
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            phone: row.phone,
            address: Address {
                street: row.address_street,
                city: row.address_city,
                state: row.address_state,
                zip: row.address_zip,
            },
            deleted: row.deleted,
        }
    }
}

impl From<Customer> for CustomerRow {
    fn from(customer: Customer) -> Self {
        let Address {
            street,
            city,
            state,
            zip,
        } = customer.address;

        CustomerRow {
            id: customer.id,
            user_id: customer.user_id,
            first_name: customer.first_name,
            last_name: customer.last_name,
            email: customer.email,
            phone: customer.phone,
            address_street: street,
            address_city: city,
            address_state: state,
            address_zip: zip,
            deleted: customer.deleted,
        }
    }
}
