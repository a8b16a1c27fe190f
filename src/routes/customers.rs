use axum::extract::State;
use axum::http::StatusCode;

use super::notes::{add_for_parent, list_for_parent, NoteForParent};
use super::{add_record, delete_record, get_record, list_records, update_record, ApiJson};
use crate::auth::extractor::AuthUser;
use crate::envelope::ApiResult;
use crate::error::AppError;
use crate::models::{Customer, Note, ParentKind};
use crate::state::SharedState;

pub async fn add(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(customer): ApiJson<Customer>,
) -> ApiResult<()> {
    if customer.first_name.trim().is_empty() || customer.last_name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "First and last name are required".to_string(),
        ));
    }
    add_record(&state.customers, &auth, customer, "Customer").await
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> ApiResult<Customer> {
    get_record(&state.customers, &auth, id, "Customer").await
}

pub async fn list(auth: AuthUser, State(state): State<SharedState>) -> ApiResult<Vec<Customer>> {
    list_records(&state.customers, &auth).await
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(customer): ApiJson<Customer>,
) -> ApiResult<()> {
    update_record(&state.customers, &auth, customer, "Customer").await
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> Result<StatusCode, AppError> {
    delete_record(&state.customers, &auth, id, "Customer").await
}

pub async fn notes(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(customer_id): ApiJson<i64>,
) -> ApiResult<Vec<Note>> {
    list_for_parent(&state, &auth, ParentKind::Customer, customer_id).await
}

pub async fn add_note(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NoteForParent>,
) -> ApiResult<()> {
    add_for_parent(&state, &auth, ParentKind::Customer, req).await
}
