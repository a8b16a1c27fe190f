use chrono::{DateTime, NaiveDate};
use serde_json::json;

use bizdesk::envelope::Envelope;
use bizdesk::models::{
    Address, Appointment, AppointmentRow, AppointmentTime, Customer, CustomerRow, Invoice,
    InvoiceItem, InvoiceRow, ParentKind, Session, SessionRow,
};

fn address() -> Address {
    Address {
        street: "12 Elm Rd".to_string(),
        city: "Portland".to_string(),
        state: "OR".to_string(),
        zip: "97201".to_string(),
    }
}

fn customer() -> Customer {
    Customer {
        id: 7,
        user_id: 1,
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@example.com".to_string(),
        phone: "555-0101".to_string(),
        address: address(),
        deleted: false,
    }
}

fn appointment() -> Appointment {
    Appointment {
        id: 3,
        user_id: 1,
        customer_id: 7,
        title: "Spring cleanup".to_string(),
        description: "Front and back yard".to_string(),
        time: AppointmentTime {
            date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
            start: "09:00".to_string(),
            end: "11:30".to_string(),
            exact: true,
        },
        address: address(),
        deleted: true,
    }
}

#[test]
fn customer_row_round_trip() {
    let original = customer();
    let row = CustomerRow::from(original.clone());

    assert_eq!(row.address_street, "12 Elm Rd");
    assert_eq!(row.address_city, "Portland");
    assert_eq!(row.address_state, "OR");
    assert_eq!(row.address_zip, "97201");
    assert_eq!(Customer::from(row), original);
}

#[test]
fn appointment_row_round_trip() {
    let original = appointment();
    let row = AppointmentRow::from(original.clone());

    assert_eq!(row.time_date, NaiveDate::from_ymd_opt(2026, 4, 2).unwrap());
    assert_eq!(row.time_start, "09:00");
    assert_eq!(row.time_end, "11:30");
    assert!(row.time_exact);
    assert_eq!(row.address_zip, "97201");
    assert!(row.deleted);
    assert_eq!(Appointment::from(row), original);
}

#[test]
fn appointment_row_round_trip_with_empty_address() {
    let mut original = appointment();
    original.address = Address::default();
    original.time.exact = false;

    let row = AppointmentRow::from(original.clone());
    assert_eq!(row.address_street, "");
    assert_eq!(Appointment::from(row), original);
}

#[test]
fn invoice_row_recomputes_total() {
    let invoice = Invoice {
        id: 1,
        user_id: 1,
        customer_id: 7,
        appointment_id: Some(3),
        issue_date: NaiveDate::from_ymd_opt(2026, 4, 2).unwrap(),
        due_date: NaiveDate::from_ymd_opt(2026, 5, 2).unwrap(),
        items: vec![
            InvoiceItem {
                service_id: Some(4),
                description: "Mowing".to_string(),
                quantity: 2.0,
                price: 40.0,
            },
            InvoiceItem {
                service_id: None,
                description: "Disposal fee".to_string(),
                quantity: 1.0,
                price: 15.5,
            },
        ],
        paid: false,
        deleted: false,
        total: 0.0,
    };

    let restored = Invoice::from(InvoiceRow::from(invoice.clone()));
    assert_eq!(restored.items, invoice.items);
    assert_eq!(restored.total, 95.5);
}

#[test]
fn session_row_keeps_millisecond_expiry() {
    let session = Session {
        cookie_id: "abc".to_string(),
        user_id: 9,
        expire_time: DateTime::from_timestamp_millis(1_780_000_000_123).unwrap(),
    };

    let row = SessionRow::from(session.clone());
    assert_eq!(row.expire_time, 1_780_000_000_123);
    assert_eq!(Session::from(row), session);
}

#[test]
fn session_validity_is_strictly_before_expiry() {
    let expire_time = DateTime::from_timestamp_millis(1_780_000_000_000).unwrap();
    let session = Session {
        cookie_id: "abc".to_string(),
        user_id: 9,
        expire_time,
    };

    assert!(session.is_valid_at(expire_time - chrono::Duration::milliseconds(1)));
    assert!(!session.is_valid_at(expire_time));
    assert!(!session.is_valid_at(expire_time + chrono::Duration::seconds(1)));
}

#[test]
fn customer_json_uses_wire_names() {
    let value = serde_json::to_value(customer()).unwrap();

    assert_eq!(value["userID"], 1);
    assert_eq!(value["firstName"], "Jane");
    assert_eq!(value["address"]["city"], "Portland");
    assert!(value.get("address_city").is_none());
}

#[test]
fn customer_json_defaults_missing_fields() {
    let customer: Customer = serde_json::from_value(json!({
        "firstName": "Sam",
        "lastName": "Lee"
    }))
    .unwrap();

    assert_eq!(customer.id, 0);
    assert_eq!(customer.address, Address::default());
    assert!(!customer.deleted);
}

#[test]
fn parent_bindings_are_distinct() {
    for kind in ParentKind::ALL {
        let binding = kind.binding();
        assert!(binding.link_table.starts_with(&kind.to_string()));
        assert!(binding.create_path.starts_with(binding.list_path));

        for other in ParentKind::ALL.into_iter().filter(|other| *other != kind) {
            assert_ne!(binding.link_table, other.binding().link_table);
            assert_ne!(binding.list_path, other.binding().list_path);
        }
    }
}

#[test]
fn envelope_omits_absent_fields() {
    let value = serde_json::to_value(Envelope::<()>::fail("Nope")).unwrap();
    assert_eq!(value, json!({ "success": false, "message": "Nope" }));

    let value = serde_json::to_value(Envelope::ok(vec![1, 2])).unwrap();
    assert_eq!(value, json!({ "success": true, "data": [1, 2] }));
}

#[test]
fn envelope_reads_back_records_without_default() {
    let failed: Envelope<Customer> =
        serde_json::from_value(json!({ "success": false, "message": "Customer not found" }))
            .unwrap();
    assert!(!failed.success);
    assert!(failed.data.is_none());

    let loaded: Envelope<Customer> = serde_json::from_value(json!({
        "success": true,
        "data": serde_json::to_value(customer()).unwrap(),
    }))
    .unwrap();
    assert_eq!(loaded.data, Some(customer()));
    assert!(loaded.message.is_none());
}
