use axum::extract::State;
use axum::http::StatusCode;

use super::notes::{add_for_parent, list_for_parent, NoteForParent};
use super::{add_record, delete_record, get_record, list_records, update_record, ApiJson};
use crate::auth::extractor::AuthUser;
use crate::envelope::ApiResult;
use crate::error::AppError;
use crate::models::{Note, ParentKind, Service};
use crate::state::SharedState;

fn validate(service: &Service) -> Result<(), AppError> {
    if service.name.trim().is_empty() {
        return Err(AppError::BadRequest("Service name is required".to_string()));
    }
    if !service.price.is_finite() || service.price < 0.0 {
        return Err(AppError::BadRequest(
            "Price must be a non-negative number".to_string(),
        ));
    }
    Ok(())
}

pub async fn add(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(service): ApiJson<Service>,
) -> ApiResult<()> {
    validate(&service)?;
    add_record(&state.services, &auth, service, "Service").await
}

pub async fn get(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> ApiResult<Service> {
    get_record(&state.services, &auth, id, "Service").await
}

pub async fn list(auth: AuthUser, State(state): State<SharedState>) -> ApiResult<Vec<Service>> {
    list_records(&state.services, &auth).await
}

pub async fn update(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(service): ApiJson<Service>,
) -> ApiResult<()> {
    validate(&service)?;
    update_record(&state.services, &auth, service, "Service").await
}

pub async fn delete(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(id): ApiJson<i64>,
) -> Result<StatusCode, AppError> {
    delete_record(&state.services, &auth, id, "Service").await
}

pub async fn notes(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(service_id): ApiJson<i64>,
) -> ApiResult<Vec<Note>> {
    list_for_parent(&state, &auth, ParentKind::Service, service_id).await
}

pub async fn add_note(
    auth: AuthUser,
    State(state): State<SharedState>,
    ApiJson(req): ApiJson<NoteForParent>,
) -> ApiResult<()> {
    add_for_parent(&state, &auth, ParentKind::Service, req).await
}
