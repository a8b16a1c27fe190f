pub mod appointments;
pub mod auth;
pub mod customers;
pub mod invoices;
pub mod notes;
pub mod services;

use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;

use crate::auth::extractor::AuthUser;
use crate::db::EntityStore;
use crate::envelope::{created, done, ok, ApiResult};
use crate::error::AppError;
use crate::models::Owned;
use crate::state::SharedState;

/// `axum::Json` whose rejection is rendered as a failure envelope.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        // Auth
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", post(auth::current_user))
        // Customers
        .route("/api/customers/add", post(customers::add))
        .route("/api/customers/get", post(customers::get))
        .route("/api/customers/list", post(customers::list))
        .route("/api/customers/update", post(customers::update))
        .route("/api/customers/delete", post(customers::delete))
        .route("/api/customers/notes", post(customers::notes))
        .route("/api/customers/notes/add", post(customers::add_note))
        // Appointments
        .route("/api/appointments/add", post(appointments::add))
        .route("/api/appointments/get", post(appointments::get))
        .route("/api/appointments/list", post(appointments::list))
        .route("/api/appointments/update", post(appointments::update))
        .route("/api/appointments/delete", post(appointments::delete))
        .route("/api/appointments/notes", post(appointments::notes))
        .route("/api/appointments/notes/add", post(appointments::add_note))
        // Services
        .route("/api/services/add", post(services::add))
        .route("/api/services/get", post(services::get))
        .route("/api/services/list", post(services::list))
        .route("/api/services/update", post(services::update))
        .route("/api/services/delete", post(services::delete))
        .route("/api/services/notes", post(services::notes))
        .route("/api/services/notes/add", post(services::add_note))
        // Invoices
        .route("/api/invoices/add", post(invoices::add))
        .route("/api/invoices/get", post(invoices::get))
        .route("/api/invoices/list", post(invoices::list))
        .route("/api/invoices/update", post(invoices::update))
        .route("/api/invoices/delete", post(invoices::delete))
        .route("/api/invoices/notes", post(invoices::notes))
        .route("/api/invoices/notes/add", post(invoices::add_note))
        // Notes by id
        .route("/api/notes/get", post(notes::get))
        .route("/api/notes/update", post(notes::update))
        .route("/api/notes/delete", post(notes::delete))
}

// Shared bodies of the per-entity handlers. Every record is scoped to the
// session user: someone else's record is reported as not found.

async fn add_record<S>(
    store: &S,
    auth: &AuthUser,
    mut record: S::Record,
    what: &str,
) -> ApiResult<()>
where
    S: EntityStore,
    S::Record: Owned,
{
    record.set_id(0);
    record.set_owner(auth.user_id);

    if store.add_new(record).await? {
        tracing::debug!(user_id = auth.user_id, "{what} created");
        created(&format!("{what} created"))
    } else {
        Err(AppError::Internal(format!("{what} insert changed no rows")))
    }
}

/// A record referenced from another one (e.g. an appointment's customer) must
/// be live and belong to the session user.
async fn require_reference<S>(
    store: &S,
    auth: &AuthUser,
    id: i64,
    what: &str,
) -> Result<(), AppError>
where
    S: EntityStore,
    S::Record: Owned,
{
    match store.get_by_id(id).await? {
        Some(record) if record.owner_id() == auth.user_id && !record.is_deleted() => Ok(()),
        _ => Err(AppError::NotFound(format!("{what} not found"))),
    }
}

async fn get_record<S>(store: &S, auth: &AuthUser, id: i64, what: &str) -> ApiResult<S::Record>
where
    S: EntityStore,
    S::Record: Owned,
{
    let record = store
        .get_by_id(id)
        .await?
        .filter(|record| record.owner_id() == auth.user_id)
        .ok_or_else(|| AppError::NotFound(format!("{what} not found")))?;
    ok(record)
}

async fn list_records<S>(store: &S, auth: &AuthUser) -> ApiResult<Vec<S::Record>>
where
    S: EntityStore,
{
    match store.get_all_by_owner(auth.user_id).await? {
        Some(records) => ok(records),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

async fn update_record<S>(
    store: &S,
    auth: &AuthUser,
    mut record: S::Record,
    what: &str,
) -> ApiResult<()>
where
    S: EntityStore,
    S::Record: Owned,
{
    record.set_owner(auth.user_id);
    let id = record.id();

    if store.update_by_id(id, record).await? {
        done(&format!("{what} updated"))
    } else {
        Err(AppError::NotFound(format!("{what} not found")))
    }
}

async fn delete_record<S>(
    store: &S,
    auth: &AuthUser,
    id: i64,
    what: &str,
) -> Result<StatusCode, AppError>
where
    S: EntityStore,
    S::Record: Owned,
{
    let owned = store
        .get_by_id(id)
        .await?
        .is_some_and(|record| record.owner_id() == auth.user_id);

    if owned && store.delete_by_id(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("{what} not found")))
    }
}
