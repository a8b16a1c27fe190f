use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    #[serde(rename = "serviceID", default, skip_serializing_if = "Option::is_none")]
    pub service_id: Option<i64>,
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: f64,
    pub price: f64,
}

fn default_quantity() -> f64 {
    1.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "userID", default)]
    pub user_id: i64,
    #[serde(rename = "customerID")]
    pub customer_id: i64,
    #[serde(rename = "appointmentID", default)]
    pub appointment_id: Option<i64>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub items: Vec<InvoiceItem>,
    #[serde(default)]
    pub paid: bool,
    #[serde(default)]
    pub deleted: bool,
    /// Derived from `items` on every read; ignored on write.
    #[serde(default)]
    pub total: f64,
}

impl Invoice {
    pub fn compute_total(items: &[InvoiceItem]) -> f64 {
        items.iter().map(|item| item.quantity * item.price).sum()
    }
}

/// Storage shape of an [`Invoice`]. Line items live in one JSON column.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct InvoiceRow {
    pub id: i64,
    pub user_id: i64,
    pub customer_id: i64,
    pub appointment_id: Option<i64>,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub items: Json<Vec<InvoiceItem>>,
    pub paid: bool,
    pub deleted: bool,
}

impl From<InvoiceRow> for Invoice {
    fn from(row: InvoiceRow) -> Self {
        let items = row.items.0;
        let total = Invoice::compute_total(&items);

        Invoice {
            id: row.id,
            user_id: row.user_id,
            customer_id: row.customer_id,
            appointment_id: row.appointment_id,
            issue_date: row.issue_date,
            due_date: row.due_date,
            items,
            paid: row.paid,
            deleted: row.deleted,
            total,
        }
    }
}

impl From<Invoice> for InvoiceRow {
    fn from(invoice: Invoice) -> Self {
        InvoiceRow {
            id: invoice.id,
            user_id: invoice.user_id,
            customer_id: invoice.customer_id,
            appointment_id: invoice.appointment_id,
            issue_date: invoice.issue_date,
            due_date: invoice.due_date,
            items: Json(invoice.items),
            paid: invoice.paid,
            deleted: invoice.deleted,
        }
    }
}
