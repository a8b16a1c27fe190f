mod common;

use chrono::NaiveDate;

use bizdesk::client::{ApiClient, ClientError, Reply, Signup};
use bizdesk::models::{
    Address, Customer, Invoice, InvoiceItem, NoteDraft, ParentKind, Service,
};

use common::PASSWORD;

async fn signed_in(app: &common::TestApp, email: &str) -> ApiClient {
    let api = app.api_client();
    let reply = api
        .signup(&Signup {
            first_name: "Client",
            last_name: "User",
            email,
            password: PASSWORD,
        })
        .await
        .unwrap();
    assert!(reply.into_body().unwrap().success);

    let reply = api.login(email, PASSWORD).await.unwrap();
    let user = reply.into_body().unwrap().data.unwrap();
    assert_eq!(user.email, email);
    api
}

fn customer(first_name: &str) -> Customer {
    Customer {
        id: 0,
        user_id: 0,
        first_name: first_name.to_string(),
        last_name: "Doe".to_string(),
        email: String::new(),
        phone: String::new(),
        address: Address::default(),
        deleted: false,
    }
}

async fn first_customer(api: &ApiClient) -> Customer {
    let reply = api.list_customers().await.unwrap();
    reply.into_body().unwrap().data.unwrap().remove(0)
}

#[tokio::test]
async fn session_carries_across_calls() {
    let app = common::spawn_app().await;
    let api = signed_in(&app, "client@test.com").await;

    let user = api.current_user().await.unwrap().into_body().unwrap();
    assert!(user.success);
    assert_eq!(user.data.unwrap().first_name, "Client");

    api.logout().await.unwrap();
    let after = api.current_user().await.unwrap().into_body().unwrap();
    assert!(!after.success);
}

#[tokio::test]
async fn delete_comes_back_as_no_content() {
    let app = common::spawn_app().await;
    let api = signed_in(&app, "client@test.com").await;

    api.add_customer(&customer("Alice")).await.unwrap();
    let alice = first_customer(&api).await;

    let reply = api.delete_customer(alice.id).await.unwrap();
    assert_eq!(reply, Reply::NoContent);

    let reply = api.get_customer(alice.id).await.unwrap();
    assert!(reply.into_body().unwrap().data.unwrap().deleted);
}

#[tokio::test]
async fn failure_envelope_is_returned_as_is() {
    let app = common::spawn_app().await;
    let api = signed_in(&app, "client@test.com").await;

    let reply = api.get_customer(12345).await.unwrap();
    let envelope = reply.into_body().unwrap();
    assert!(!envelope.success);
    assert_eq!(envelope.message.as_deref(), Some("Customer not found"));
    assert!(envelope.data.is_none());
}

#[tokio::test]
async fn update_round_trips_typed_records() {
    let app = common::spawn_app().await;
    let api = signed_in(&app, "client@test.com").await;

    api.add_service(&Service {
        id: 0,
        user_id: 0,
        name: "Mowing".to_string(),
        description: String::new(),
        price: 30.0,
        deleted: false,
    })
    .await
    .unwrap();

    let mut service = api
        .list_services()
        .await
        .unwrap()
        .into_body()
        .unwrap()
        .data
        .unwrap()
        .remove(0);
    service.price = 32.5;
    let reply = api.update_service(&service).await.unwrap();
    assert!(reply.into_body().unwrap().success);

    let stored = api.get_service(service.id).await.unwrap().into_body().unwrap();
    assert_eq!(stored.data.unwrap(), service);
}

#[tokio::test]
async fn invoice_total_is_computed_server_side() {
    let app = common::spawn_app().await;
    let api = signed_in(&app, "client@test.com").await;
    api.add_customer(&customer("Alice")).await.unwrap();
    let alice = first_customer(&api).await;

    let reply = api
        .add_invoice(&Invoice {
            id: 0,
            user_id: 0,
            customer_id: alice.id,
            appointment_id: None,
            issue_date: NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2026, 10, 15).unwrap(),
            items: vec![InvoiceItem {
                service_id: None,
                description: "Leaf removal".to_string(),
                quantity: 3.0,
                price: 20.0,
            }],
            paid: false,
            deleted: false,
            total: 0.0,
        })
        .await
        .unwrap();
    assert!(reply.into_body().unwrap().success);

    let invoices = api.list_invoices().await.unwrap().into_body().unwrap();
    assert_eq!(invoices.data.unwrap()[0].total, 60.0);
}

#[tokio::test]
async fn non_json_reply_is_a_decode_error() {
    let app = common::spawn_app().await;
    let api = app.api_client();

    // GET-only route: the 405 has no JSON body.
    let result = api.post::<_, serde_json::Value>("/health", &()).await;
    assert!(matches!(result, Err(ClientError::Decode(_))));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(format!("http://{addr}")).unwrap();
    let result = api.list_customers().await;
    assert!(matches!(result, Err(ClientError::Transport(_))));
}

// ── Notes ───────────────────────────────────────────────────────

#[tokio::test]
async fn note_client_round_trip() {
    let app = common::spawn_app().await;
    let api = signed_in(&app, "client@test.com").await;
    api.add_customer(&customer("Alice")).await.unwrap();
    let alice = first_customer(&api).await;

    let notes = api.notes(ParentKind::Customer);
    assert_eq!(notes.kind(), ParentKind::Customer);

    let created = notes
        .create_note(
            alice.id,
            &NoteDraft {
                title: "Call ahead".to_string(),
                note: "Prefers mornings".to_string(),
            },
        )
        .await;
    assert!(created.success, "{:?}", created.message);

    let listed = notes.get_notes(alice.id).await;
    let mut note = listed.data.unwrap().remove(0);
    assert_eq!(note.title, "Call ahead");

    note.note = "Prefers afternoons".to_string();
    assert!(notes.update_note(&note).await.success);
    assert_eq!(
        notes.get_note(note.id).await.data.unwrap().note,
        "Prefers afternoons"
    );

    let deleted = notes.delete_note(note.id).await;
    assert!(deleted.success);
    assert_eq!(deleted.message.as_deref(), Some("Note deleted"));
    assert!(notes.get_notes(alice.id).await.data.unwrap().is_empty());
}

#[tokio::test]
async fn note_client_reports_failures_as_envelopes() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let notes = ApiClient::new(format!("http://{addr}"))
        .unwrap()
        .notes(ParentKind::Service);

    let listed = notes.get_notes(1).await;
    assert!(!listed.success);
    assert!(listed.message.is_some());
    assert!(listed.data.is_none());

    let deleted = notes.delete_note(1).await;
    assert!(!deleted.success);
}

#[tokio::test]
async fn note_client_targets_each_parent_kind() {
    let app = common::spawn_app().await;
    let api = signed_in(&app, "client@test.com").await;
    api.add_customer(&customer("Alice")).await.unwrap();
    let alice = first_customer(&api).await;

    let draft = NoteDraft {
        title: "Only on the customer".to_string(),
        note: String::new(),
    };
    assert!(api.notes(ParentKind::Customer).create_note(alice.id, &draft).await.success);

    // Same numeric id, different parent kind: no such service.
    let services = api.notes(ParentKind::Service).get_notes(alice.id).await;
    assert!(!services.success);
}
