use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(default)]
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub note: String,
    #[serde(default = "Utc::now")]
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub deleted: bool,
}

/// Body of a note that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: String,
    #[serde(default)]
    pub note: String,
}

impl NoteDraft {
    pub fn into_note(self, created_date: DateTime<Utc>) -> Note {
        Note {
            id: 0,
            title: self.title,
            note: self.note,
            created_date,
            deleted: false,
        }
    }
}

/// The kind of record a note hangs off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParentKind {
    Customer,
    Appointment,
    Service,
    Invoice,
}

/// Where notes for one [`ParentKind`] live, both in storage and on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentBinding {
    /// Table that owns the parent rows.
    pub parent_table: &'static str,
    /// Association table joining parents to notes.
    pub link_table: &'static str,
    /// Parent id column in `link_table`.
    pub parent_column: &'static str,
    pub list_path: &'static str,
    pub create_path: &'static str,
}

static BINDINGS: [ParentBinding; 4] = [
    ParentBinding {
        parent_table: "customers",
        link_table: "customer_notes",
        parent_column: "customer_id",
        list_path: "/api/customers/notes",
        create_path: "/api/customers/notes/add",
    },
    ParentBinding {
        parent_table: "appointments",
        link_table: "appointment_notes",
        parent_column: "appointment_id",
        list_path: "/api/appointments/notes",
        create_path: "/api/appointments/notes/add",
    },
    ParentBinding {
        parent_table: "services",
        link_table: "service_notes",
        parent_column: "service_id",
        list_path: "/api/services/notes",
        create_path: "/api/services/notes/add",
    },
    ParentBinding {
        parent_table: "invoices",
        link_table: "invoice_notes",
        parent_column: "invoice_id",
        list_path: "/api/invoices/notes",
        create_path: "/api/invoices/notes/add",
    },
];

impl ParentKind {
    pub const ALL: [ParentKind; 4] = [
        ParentKind::Customer,
        ParentKind::Appointment,
        ParentKind::Service,
        ParentKind::Invoice,
    ];

    pub fn binding(self) -> &'static ParentBinding {
        &BINDINGS[self as usize]
    }
}

impl std::fmt::Display for ParentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ParentKind::Customer => "customer",
            ParentKind::Appointment => "appointment",
            ParentKind::Service => "service",
            ParentKind::Invoice => "invoice",
        };
        f.write_str(name)
    }
}
