use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Address;

/// When an appointment happens. `exact` is false when `start`/`end` are
/// only an approximate window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentTime {
    pub date: NaiveDate,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub exact: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "userID", default)]
    pub user_id: i64,
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub time: AppointmentTime,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub deleted: bool,
}

/// Flat storage shape of an [`Appointment`].
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct AppointmentRow {
    pub id: i64,
    pub user_id: i64,
    pub customer_id: i64,
    pub title: String,
    pub description: String,
    pub time_date: NaiveDate,
    pub time_start: String,
    pub time_end: String,
    pub time_exact: bool,
    pub address_street: String,
    pub address_city: String,
    pub address_state: String,
    pub address_zip: String,
    pub deleted: bool,
}

impl From<AppointmentRow> for Appointment {
    fn from(row: AppointmentRow) -> Self {
        Appointment {
            id: row.id,
            user_id: row.user_id,
            customer_id: row.customer_id,
            title: row.title,
            description: row.description,
            time: AppointmentTime {
                date: row.time_date,
                start: row.time_start,
                end: row.time_end,
                exact: row.time_exact,
            },
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

impl From<Appointment> for AppointmentRow {
    fn from(appointment: Appointment) -> Self {
        let AppointmentTime {
            date,
            start,
            end,
            exact,
        } = appointment.time;
        let Address {
            street,
            city,
            state,
            zip,
        } = appointment.address;

        AppointmentRow {
            id: appointment.id,
            user_id: appointment.user_id,
            customer_id: appointment.customer_id,
            title: appointment.title,
            description: appointment.description,
            time_date: date,
            time_start: start,
            time_end: end,
            time_exact: exact,
            address_street: street,
            address_city: city,
            address_state: state,
            address_zip: zip,
            deleted: appointment.deleted,
        }
    }
}
